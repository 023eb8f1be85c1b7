//! Dividend and bonus-share adjustments

use super::models::Adjustment;
use crate::error::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

/// Adjustments of one symbol with an ex-date in `[start, end]`
pub fn get_adjustments(
    conn: &Connection,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Adjustment>> {
    let mut stmt = conn.prepare(
        "SELECT code, date, amount, ratio, record_date, pay_date, listing_date
         FROM adjustments
         WHERE code = ?1 AND date BETWEEN ?2 AND ?3",
    )?;

    let rows = stmt
        .query_map(params![symbol, start, end], |row| {
            Ok(Adjustment {
                symbol: row.get(0)?,
                date: row.get(1)?,
                amount: row.get(2)?,
                ratio: row.get(3)?,
                record_date: row.get(4)?,
                pay_date: row.get(5)?,
                listing_date: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Loaded {} adjustments for {} between {} and {}",
        rows.len(),
        symbol,
        start,
        end
    );
    Ok(rows)
}
