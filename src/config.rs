//! Adapter configuration

use crate::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Which daily-bar row supplies a symbol's display name when it changed over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetNamePolicy {
    /// Name on the last traded day
    #[default]
    MostRecent,
    /// Name on the first traded day
    Earliest,
}

/// Database adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Path of the SQLite market database
    pub database_path: PathBuf,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connection_timeout_secs: u64,
    /// Open the database read-only
    pub read_only: bool,
    pub asset_name_policy: AssetNamePolicy,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("cswd.db"),
            max_connections: 4,
            connection_timeout_secs: 3,
            read_only: true,
            asset_name_policy: AssetNamePolicy::default(),
        }
    }
}

impl AdapterConfig {
    /// Config pointing at the given database with defaults elsewhere
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Reject settings the connection pool cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AdapterError::Config(
                "max_connections must be positive".to_string(),
            ));
        }
        if self.connection_timeout_secs == 0 {
            return Err(AdapterError::Config(
                "connection_timeout_secs must be positive".to_string(),
            ));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(AdapterError::Config("database_path is empty".to_string()));
        }
        Ok(())
    }
}
