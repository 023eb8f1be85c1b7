//! Asset Metadata Service
//!
//! Builds the per-symbol metadata table the bundle writer registers assets
//! from: trading span from the daily bars, exchange from the symbol code,
//! then listing and delisting dates left-joined on symbol.

use crate::config::AssetNamePolicy;
use crate::db::sqlite::models::{EndDate, StartDate, TradedRange};
use crate::db::sqlite::{issue, special_treatment, stock_daily};
use crate::error::{AdapterError, Result};
use crate::exchange::{exchange_of, Exchange};
use crate::table::Record;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One asset as registered by the ingestion pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub symbol: String,
    pub asset_name: Option<String>,
    pub first_traded: NaiveDate,
    pub last_traded: NaiveDate,
    pub exchange: Exchange,
    /// Day after `last_traded`
    pub auto_close_date: NaiveDate,
    /// Listing date; `None` when the issue table has none
    pub start_date: Option<NaiveDate>,
    /// Delisting date; `None` while the symbol is still listed
    pub end_date: Option<NaiveDate>,
}

impl Record for AssetMetadata {
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "asset_name",
        "first_traded",
        "last_traded",
        "exchange",
        "auto_close_date",
        "start_date",
        "end_date",
    ];
}

/// Asset metadata service
pub struct AssetMetadataService;

impl AssetMetadataService {
    /// Generate metadata for every symbol with at least one daily bar.
    ///
    /// All three source queries run on `conn`, so inside one session they
    /// see the same snapshot.
    pub fn generate(conn: &Connection, policy: AssetNamePolicy) -> Result<Vec<AssetMetadata>> {
        let ranges = stock_daily::get_traded_ranges(conn, policy)?;
        let start_dates = index_start_dates(issue::get_start_dates(conn)?);
        let end_dates = index_end_dates(special_treatment::get_end_dates(conn)?);

        let assets = ranges
            .into_iter()
            .map(|range| {
                let start_date = start_dates.get(&range.symbol).copied();
                let end_date = end_dates.get(&range.symbol).copied();
                Self::assemble(range, start_date, end_date)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "AssetMetadataService::generate - {} assets ({} with end date)",
            assets.len(),
            assets.iter().filter(|a| a.end_date.is_some()).count()
        );
        Ok(assets)
    }

    /// Combine a traded range with its joined listing and delisting dates
    pub fn assemble(
        range: TradedRange,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<AssetMetadata> {
        let auto_close_date = range.last_traded.succ_opt().ok_or_else(|| {
            AdapterError::InvalidDate(format!("no calendar day after {}", range.last_traded))
        })?;

        Ok(AssetMetadata {
            exchange: exchange_of(&range.symbol),
            symbol: range.symbol,
            asset_name: range.asset_name,
            first_traded: range.first_traded,
            last_traded: range.last_traded,
            auto_close_date,
            start_date,
            end_date,
        })
    }
}

fn index_start_dates(rows: Vec<StartDate>) -> HashMap<String, NaiveDate> {
    rows.into_iter().map(|r| (r.symbol, r.start_date)).collect()
}

fn index_end_dates(rows: Vec<EndDate>) -> HashMap<String, NaiveDate> {
    rows.into_iter().map(|r| (r.symbol, r.end_date)).collect()
}
