//! Tick file loading and per-symbol pooling.
//!
//! The tick file is a JSON array of `{timestamp, symbol, price}` objects,
//! read once at startup. There is no schema validation beyond what serde
//! enforces; load failures are typed so the UI can surface a single message.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::domain::Tick;

/// Structured errors for the one-shot data load.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read tick file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tick file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the tick set from a JSON array file. One-shot, no retry.
pub fn load_ticks(path: &Path) -> Result<Vec<Tick>, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Ticks grouped per symbol, each group sorted by timestamp ascending.
///
/// Built once after load; both the replay feed and the card updater draw
/// from it, so the grouping work is not repeated per timer firing.
#[derive(Debug, Clone, Default)]
pub struct TickPool {
    groups: HashMap<String, Vec<Tick>>,
}

impl TickPool {
    pub fn build(ticks: &[Tick]) -> Self {
        let mut groups: HashMap<String, Vec<Tick>> = HashMap::new();
        for tick in ticks {
            groups.entry(tick.symbol.clone()).or_default().push(tick.clone());
        }
        for group in groups.values_mut() {
            // Stable sort: ties keep input order.
            group.sort_by_key(|t| t.timestamp);
        }
        Self { groups }
    }

    pub fn get(&self, symbol: &str) -> Option<&[Tick]> {
        self.groups.get(symbol).map(|g| g.as_slice())
    }

    /// Most recent tick for a symbol, if any.
    pub fn latest(&self, symbol: &str) -> Option<&Tick> {
        self.groups.get(symbol).and_then(|g| g.last())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Min/max timestamp over the whole tick set. `None` when empty.
pub fn time_bounds(ticks: &[Tick]) -> Option<(i64, i64)> {
    let mut iter = ticks.iter().map(|t| t.timestamp);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
    Some((min, max))
}
