//! Database access

pub mod sqlite;
