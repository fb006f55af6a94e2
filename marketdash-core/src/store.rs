//! Preference store — an explicit key/value repository.
//!
//! The composition root owns exactly one store and passes it down; no
//! module reaches for ambient global state. Preferences are best-effort:
//! a missing or corrupt file degrades to defaults, and write failures are
//! the caller's to swallow.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Persisted key space, mirrored from the browser build of this dashboard.
pub mod keys {
    pub const FILTER_MODE: &str = "filterMode";
    pub const CUSTOM_DATE_RANGE: &str = "customDateRange";
    pub const DATE_RANGE: &str = "dateRange";
    pub const SELECTED_SYMBOLS: &str = "selectedSymbols";
    pub const LIVE_HIDDEN_SYMBOLS: &str = "liveHiddenSymbols";
    pub const LIVE_CHART_DATA: &str = "liveFilterChartData";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write preference file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Injected key→JSON repository. Last write wins; no versioning.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Read and decode a key. Decode failures (stale schema) read as absent.
pub fn get_json<T: DeserializeOwned>(store: &dyn PrefStore, key: &str) -> Option<T> {
    store
        .get(key)
        .and_then(|value| serde_json::from_value(value).ok())
}

/// Encode and write a key, swallowing failures — preferences never take
/// the dashboard down.
pub fn put_json<T: Serialize>(store: &mut dyn PrefStore, key: &str, value: &T) {
    if let Ok(encoded) = serde_json::to_value(value) {
        let _ = store.set(key, encoded);
    }
}

/// One JSON object file, write-through on every `set`.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`. Missing or corrupt files start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.display().to_string(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl PrefStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

/// In-memory store for tests and `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: BTreeMap<String, Value>,
}

impl PrefStore for MemStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
