//! End dates derived from special treatment events

use super::models::{EndDate, TreatmentKind};
use crate::error::Result;
use rusqlite::{params, Connection};

/// Latest delisting or PT event date per symbol.
///
/// Symbols that never received one of those treatments are left out. Other
/// treatments recorded after a delisting or PT event, such as a later
/// resumption or ST flag, neither move the end date nor drop the symbol.
pub fn get_end_dates(conn: &Connection) -> Result<Vec<EndDate>> {
    let [delisting, pt] = TreatmentKind::TERMINAL;
    let mut stmt = conn.prepare(
        "SELECT code, MAX(date)
         FROM special_treatments
         WHERE treatment IN (?1, ?2)
         GROUP BY code
         ORDER BY code",
    )?;

    let rows = stmt
        .query_map(params![delisting, pt], |row| {
            Ok(EndDate {
                symbol: row.get(0)?,
                end_date: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!("Loaded {} end dates", rows.len());
    Ok(rows)
}
