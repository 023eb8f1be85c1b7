//! Scoped read sessions
//!
//! Every session is one pooled connection with one deferred transaction.
//! Dropping the transaction without committing rolls it back, and the
//! connection returns to the pool when the scope ends.

use super::connection::DbPool;
use crate::error::Result;
use rusqlite::Connection;

/// Run `f` inside a fresh session: commit when it succeeds, roll back when
/// it fails. The connection goes back to the pool either way.
pub fn session_scope<T, F>(pool: &DbPool, f: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T>,
{
    let mut conn = pool.get()?;
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
