//! Listing (start) dates from the issue table

use super::models::StartDate;
use crate::error::Result;
use rusqlite::Connection;

/// Symbols with a published listing date, in store order
pub fn get_start_dates(conn: &Connection) -> Result<Vec<StartDate>> {
    let mut stmt = conn.prepare(
        "SELECT code, listing_date FROM issues WHERE listing_date IS NOT NULL",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StartDate {
                symbol: row.get(0)?,
                start_date: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!("Loaded {} start dates", rows.len());
    Ok(rows)
}
