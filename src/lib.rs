//! A-share SQL data adapter
//!
//! Reads listing dates, special treatments, daily bars and dividend
//! adjustments of Chinese equities from a SQLite market database and
//! reshapes them into the fixed-schema tables a backtest bundle ingests.
//!
//! ```no_run
//! use ashare_sqldata::{AdapterConfig, MarketDataAdapter};
//!
//! # fn main() -> ashare_sqldata::Result<()> {
//! let adapter = MarketDataAdapter::open(&AdapterConfig::new("cswd.db"))?;
//! let assets = adapter.gen_asset_metadata()?;
//! let bars = adapter.fetch_single_equity("000333", "2018-04-01", "2018-04-16")?;
//! println!("{} assets, {} bars", assets.len(), bars.len());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod services;
pub mod table;

pub use adapter::MarketDataAdapter;
pub use config::{AdapterConfig, AssetNamePolicy};
pub use dates::{parse_date, DateLike};
pub use db::sqlite::models::{Adjustment, DailyBar, EndDate, StartDate, TreatmentKind};
pub use error::{AdapterError, Result};
pub use exchange::{exchange_of, Exchange};
pub use services::AssetMetadata;
pub use table::{Record, Table};
