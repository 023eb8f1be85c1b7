//! Daily bar queries

use super::models::{DailyBar, TradedRange};
use crate::config::AssetNamePolicy;
use crate::error::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

/// Bars of one symbol with `start <= date <= end`, in store order
pub fn get_daily_bars(
    conn: &Connection,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyBar>> {
    let mut stmt = conn.prepare(
        "SELECT code, date, open, high, low, close, prev_close, change_pct,
                volume, amount, turnover, cmv, tmv
         FROM stock_daily
         WHERE code = ?1 AND date BETWEEN ?2 AND ?3",
    )?;

    let bars = stmt
        .query_map(params![symbol, start, end], |row| {
            Ok(DailyBar {
                symbol: row.get(0)?,
                date: row.get(1)?,
                open: row.get(2)?,
                high: row.get(3)?,
                low: row.get(4)?,
                close: row.get(5)?,
                prev_close: row.get(6)?,
                change_pct: row.get(7)?,
                volume: row.get(8)?,
                amount: row.get(9)?,
                turnover: row.get(10)?,
                cmv: row.get(11)?,
                tmv: row.get(12)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Loaded {} daily bars for {} between {} and {}",
        bars.len(),
        symbol,
        start,
        end
    );
    Ok(bars)
}

/// First and last traded day of every symbol with at least one bar.
///
/// The display name comes from the bar picked by `policy`, so a renamed
/// symbol resolves to one well-defined name.
pub fn get_traded_ranges(conn: &Connection, policy: AssetNamePolicy) -> Result<Vec<TradedRange>> {
    let anchor = match policy {
        AssetNamePolicy::MostRecent => "last_traded",
        AssetNamePolicy::Earliest => "first_traded",
    };
    let sql = format!(
        "SELECT r.code,
                (SELECT d.name FROM stock_daily d
                 WHERE d.code = r.code AND d.date = r.{anchor}
                 LIMIT 1),
                r.first_traded,
                r.last_traded
         FROM (SELECT code, MIN(date) AS first_traded, MAX(date) AS last_traded
               FROM stock_daily
               GROUP BY code) r
         ORDER BY r.code"
    );

    let mut stmt = conn.prepare(&sql)?;
    let ranges = stmt
        .query_map([], |row| {
            Ok(TradedRange {
                symbol: row.get(0)?,
                asset_name: row.get(1)?,
                first_traded: row.get(2)?,
                last_traded: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!("Loaded traded ranges for {} symbols", ranges.len());
    Ok(ranges)
}
