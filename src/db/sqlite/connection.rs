//! SQLite connection pool

use crate::config::AdapterConfig;
use crate::error::Result;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

/// Pool of connections to the market database
pub type DbPool = r2d2::Pool<SqliteConnectionManager>;

/// Build the connection pool described by `config`
pub fn create_pool(config: &AdapterConfig) -> Result<DbPool> {
    config.validate()?;

    let flags = if config.read_only {
        OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX
    } else {
        OpenFlags::default()
    };

    let manager = SqliteConnectionManager::file(&config.database_path).with_flags(flags);
    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(config.connection_timeout())
        .build(manager)?;

    tracing::debug!(
        "Opened market database {} (max {} connections, read_only={})",
        config.database_path.display(),
        config.max_connections,
        config.read_only
    );
    Ok(pool)
}
