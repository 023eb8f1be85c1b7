//! SQLite market database
//!
//! Read access to the tables published by the market data producer:
//! `issues`, `special_treatments`, `stock_daily` and `adjustments`. The
//! adapter never creates or migrates them.

pub mod models;
pub mod adjustment;
pub mod issue;
pub mod special_treatment;
pub mod stock_daily;
mod connection;
mod session;

#[cfg(test)]
pub(crate) mod fixtures;

pub use connection::{create_pool, DbPool};
pub use session::session_scope;

use crate::config::{AdapterConfig, AssetNamePolicy};
use crate::error::Result;
use chrono::NaiveDate;
use models::*;

/// Pooled SQLite database wrapper
#[derive(Clone)]
pub struct MarketDb {
    pool: DbPool,
}

impl MarketDb {
    /// Open a pool on the configured database
    pub fn open(config: &AdapterConfig) -> Result<Self> {
        Ok(Self {
            pool: create_pool(config)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    // ========== Issue Methods ==========

    pub fn get_start_dates(&self) -> Result<Vec<StartDate>> {
        session_scope(&self.pool, issue::get_start_dates)
    }

    // ========== Special Treatment Methods ==========

    pub fn get_end_dates(&self) -> Result<Vec<EndDate>> {
        session_scope(&self.pool, special_treatment::get_end_dates)
    }

    // ========== Daily Bar Methods ==========

    pub fn get_daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        session_scope(&self.pool, |conn| {
            stock_daily::get_daily_bars(conn, symbol, start, end)
        })
    }

    pub fn get_traded_ranges(&self, policy: AssetNamePolicy) -> Result<Vec<TradedRange>> {
        session_scope(&self.pool, |conn| stock_daily::get_traded_ranges(conn, policy))
    }

    // ========== Adjustment Methods ==========

    pub fn get_adjustments(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Adjustment>> {
        session_scope(&self.pool, |conn| {
            adjustment::get_adjustments(conn, symbol, start, end)
        })
    }
}
