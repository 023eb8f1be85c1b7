//! Adapter error types

use serde::Serialize;
use thiserror::Error;

/// Adapter-wide error type
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdapterError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            AdapterError::Database(_) => "DATABASE_ERROR",
            AdapterError::Pool(_) => "POOL_ERROR",
            AdapterError::InvalidDate(_) => "INVALID_DATE",
            AdapterError::Config(_) => "CONFIG_ERROR",
            AdapterError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Serializable error report for ingestion callers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AdapterError> for ErrorResponse {
    fn from(err: &AdapterError) -> Self {
        ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
