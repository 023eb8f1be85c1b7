//! Market data adapter
//!
//! Entry point for bundle ingestion: each operation runs in its own scoped
//! session and returns a fixed-schema [`Table`].

use crate::config::{AdapterConfig, AssetNamePolicy};
use crate::dates::DateLike;
use crate::db::sqlite::models::{Adjustment, DailyBar, EndDate, StartDate};
use crate::db::sqlite::{session_scope, DbPool, MarketDb};
use crate::error::Result;
use crate::services::{AssetMetadata, AssetMetadataService};
use crate::table::Table;

/// Reads A-share market tables and reshapes them for bundle ingestion
#[derive(Clone)]
pub struct MarketDataAdapter {
    db: MarketDb,
    asset_name_policy: AssetNamePolicy,
}

impl MarketDataAdapter {
    /// Open the database described by `config`
    pub fn open(config: &AdapterConfig) -> Result<Self> {
        Ok(Self {
            db: MarketDb::open(config)?,
            asset_name_policy: config.asset_name_policy,
        })
    }

    /// Use an existing connection pool
    pub fn with_pool(pool: DbPool, asset_name_policy: AssetNamePolicy) -> Self {
        Self {
            db: MarketDb::from_pool(pool),
            asset_name_policy,
        }
    }

    /// Connection counts of the underlying pool
    pub fn pool_state(&self) -> r2d2::State {
        self.db.pool().state()
    }

    /// `symbol, start_date` for every issue with a listing date
    pub fn get_start_dates(&self) -> Result<Table<StartDate>> {
        Ok(Table::new(self.db.get_start_dates()?))
    }

    /// `symbol, end_date` for symbols that were delisted or flagged PT
    pub fn get_end_dates(&self) -> Result<Table<EndDate>> {
        Ok(Table::new(self.db.get_end_dates()?))
    }

    /// One metadata row per symbol found in the daily bars
    pub fn gen_asset_metadata(&self) -> Result<Table<AssetMetadata>> {
        let policy = self.asset_name_policy;
        let assets = session_scope(self.db.pool(), |conn| {
            AssetMetadataService::generate(conn, policy)
        })?;
        Ok(Table::new(assets))
    }

    /// Daily bars of `symbol` between `start` and `end`, both inclusive.
    ///
    /// Bounds are truncated to calendar dates first. Rows come back in store
    /// order; sort downstream when order matters.
    pub fn fetch_single_equity<S, E>(
        &self,
        symbol: &str,
        start: S,
        end: E,
    ) -> Result<Table<DailyBar>>
    where
        S: DateLike,
        E: DateLike,
    {
        let start = start.to_date()?;
        let end = end.to_date()?;
        Ok(Table::new(self.db.get_daily_bars(symbol, start, end)?))
    }

    /// Dividend and bonus-share adjustments of `symbol` with an ex-date
    /// between `start` and `end`, both inclusive.
    ///
    /// An empty result is still a table with the seven adjustment columns.
    pub fn fetch_single_equity_adjustments<S, E>(
        &self,
        symbol: &str,
        start: S,
        end: E,
    ) -> Result<Table<Adjustment>>
    where
        S: DateLike,
        E: DateLike,
    {
        let start = start.to_date()?;
        let end = end.to_date()?;
        Ok(Table::new(self.db.get_adjustments(symbol, start, end)?))
    }
}
