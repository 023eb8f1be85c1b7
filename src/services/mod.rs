//! Services Layer
//!
//! Logic that composes several table queries into one output.
//!
//! # Services
//!
//! - `AssetMetadataService` - Asset metadata from daily bars, issues and
//!   special treatments

pub mod asset_metadata_service;

pub use asset_metadata_service::{AssetMetadata, AssetMetadataService};
