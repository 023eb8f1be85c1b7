//! Market database row models

use crate::table::Record;
use chrono::NaiveDate;
use rusqlite::types::{ToSql, ToSqlOutput};
use serde::{Deserialize, Serialize};

/// Listing date of a symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartDate {
    pub symbol: String,
    pub start_date: NaiveDate,
}

impl Record for StartDate {
    const COLUMNS: &'static [&'static str] = &["symbol", "start_date"];
}

/// Delisting (end) date of a symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndDate {
    pub symbol: String,
    pub end_date: NaiveDate,
}

impl Record for EndDate {
    const COLUMNS: &'static [&'static str] = &["symbol", "end_date"];
}

/// One trading day of a single equity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub prev_close: Option<f64>,
    /// Percent change against `prev_close`; negative on down days
    pub change_pct: Option<f64>,
    pub volume: i64,
    pub amount: f64,
    /// Turnover rate
    pub turnover: Option<f64>,
    /// Circulating market value
    pub cmv: Option<f64>,
    /// Total market value
    pub tmv: Option<f64>,
}

impl DailyBar {
    /// Columns that may hold negative values. Writers targeting storage
    /// that only keeps unsigned numbers must drop these.
    pub const SIGNED_COLUMNS: &'static [&'static str] = &["change_pct"];
}

impl Record for DailyBar {
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "date",
        "open",
        "high",
        "low",
        "close",
        "prev_close",
        "change_pct",
        "volume",
        "amount",
        "turnover",
        "cmv",
        "tmv",
    ];
}

/// Dividend / bonus-share adjustment effective on an ex-date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub symbol: String,
    /// Ex-date
    pub date: NaiveDate,
    /// Cash dividend per share
    pub amount: f64,
    /// Bonus shares per share
    pub ratio: f64,
    pub record_date: Option<NaiveDate>,
    pub pay_date: Option<NaiveDate>,
    /// Listing date of the bonus shares
    pub listing_date: Option<NaiveDate>,
}

impl Record for Adjustment {
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "date",
        "amount",
        "ratio",
        "record_date",
        "pay_date",
        "listing_date",
    ];
}

/// Per-symbol trading span taken from the daily bars
#[derive(Debug, Clone, PartialEq)]
pub struct TradedRange {
    pub symbol: String,
    pub asset_name: Option<String>,
    pub first_traded: NaiveDate,
    pub last_traded: NaiveDate,
}

/// Special treatment that ends a symbol's listed life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentKind {
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "delisting")]
    Delisting,
}

impl TreatmentKind {
    pub const TERMINAL: [TreatmentKind; 2] = [TreatmentKind::Delisting, TreatmentKind::Pt];

    /// Label stored in the `treatment` column
    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentKind::Pt => "PT",
            TreatmentKind::Delisting => "delisting",
        }
    }
}

impl ToSql for TreatmentKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}
