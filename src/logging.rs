//! Tracing setup for programs embedding the adapter
//!
//! The adapter only emits `tracing` events; installing a subscriber is left
//! to the caller. This helper wires up the usual env-filter + fmt stack.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Returns false if a subscriber was already set.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
