//! Domain types shared across the dashboard.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One historical price observation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub symbol: String,
    pub price: f64,
}

impl Tick {
    pub fn new(timestamp: i64, symbol: impl Into<String>, price: f64) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            price,
        }
    }
}

/// Inclusive date range in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: i64,
    pub to: i64,
}

impl DateRange {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Both ends inclusive.
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.from && timestamp <= self.to
    }
}

/// Per-symbol price card, updated in place by the card updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub symbol: String,
    pub current_price: f64,
    pub previous_price: f64,
}

impl CardSnapshot {
    /// Signed change since the previous update; drives the up/down indicator.
    pub fn delta(&self) -> f64 {
        self.current_price - self.previous_price
    }
}

/// Convert an epoch-ms timestamp to local wall-clock time.
///
/// Returns `None` for timestamps outside chrono's representable range;
/// malformed input data degrades to "no label" rather than failing.
pub fn local_datetime(timestamp_ms: i64) -> Option<DateTime<Local>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|dt| dt.with_timezone(&Local))
}
