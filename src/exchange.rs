//! Exchange derivation from A-share symbol codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing exchange of an A-share symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// Shenzhen Stock Exchange
    #[serde(rename = "SZSE")]
    Szse,
    /// Shanghai Stock Exchange
    #[serde(rename = "SSE")]
    Sse,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Szse => "SZSE",
            Exchange::Sse => "SSE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exchange of a symbol: codes starting with `0` or `3` trade in Shenzhen,
/// everything else in Shanghai.
pub fn exchange_of(symbol: &str) -> Exchange {
    match symbol.as_bytes().first() {
        Some(b'0') | Some(b'3') => Exchange::Szse,
        _ => Exchange::Sse,
    }
}
