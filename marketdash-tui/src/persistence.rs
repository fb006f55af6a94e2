//! Glue between AppState and the injected preference store.
//!
//! Every state change mirrors its key immediately (write-through, last
//! write wins); rehydration at startup reads the same keys back. Store
//! failures never surface — preferences are best-effort.

use marketdash_core::domain::DateRange;
use marketdash_core::live::ChartFrame;
use marketdash_core::mode::FilterMode;
use marketdash_core::store::{get_json, keys, put_json, PrefStore};

use crate::app::AppState;

/// Default card/chart symbols when nothing is persisted.
pub const DEFAULT_SYMBOLS: [&str; 3] = ["AAPL", "GOOG", "MSFT"];

/// Read the persisted symbol selection, falling back to the defaults.
pub fn load_symbols(store: &dyn PrefStore) -> Vec<String> {
    get_json::<Vec<String>>(store, keys::SELECTED_SYMBOLS)
        .filter(|symbols| !symbols.is_empty())
        .unwrap_or_else(|| DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect())
}

/// Rehydrate filter, hidden set, and the live frame snapshot.
pub fn apply(app: &mut AppState, store: &dyn PrefStore) {
    if let Some(mode) = get_json::<FilterMode>(store, keys::FILTER_MODE) {
        app.filter.mode = mode;
    }
    if let Some(range) = get_json::<Option<DateRange>>(store, keys::CUSTOM_DATE_RANGE) {
        app.filter.set_custom_range(range);
    }
    if let Some(hidden) = get_json::<Vec<String>>(store, keys::LIVE_HIDDEN_SYMBOLS) {
        app.hidden = hidden.into_iter().collect();
    }
    if let Some(mut frame) = get_json::<ChartFrame>(store, keys::LIVE_CHART_DATA) {
        let persisted: Vec<&String> = frame.series.iter().map(|s| &s.label).collect();
        let current: Vec<&String> = app.symbols.iter().collect();
        // A changed symbol set invalidates the snapshot; start fresh.
        if persisted == current {
            frame.trim_to(app.max_points);
            app.frame = frame;
        }
    }
    app.sync_hidden_flags();
}

/// Persist the filter mode plus both range keys.
pub fn save_filter(app: &AppState, store: &mut dyn PrefStore) {
    put_json(store, keys::FILTER_MODE, &app.filter.mode);
    put_json(store, keys::CUSTOM_DATE_RANGE, &app.filter.custom_range);
    put_json(store, keys::DATE_RANGE, &app.filter.active_range());
}

pub fn save_hidden(app: &AppState, store: &mut dyn PrefStore) {
    let hidden: Vec<&String> = app.hidden.iter().collect();
    put_json(store, keys::LIVE_HIDDEN_SYMBOLS, &hidden);
}

pub fn save_frame(app: &AppState, store: &mut dyn PrefStore) {
    put_json(store, keys::LIVE_CHART_DATA, &app.frame);
}

pub fn save_symbols(app: &AppState, store: &mut dyn PrefStore) {
    put_json(store, keys::SELECTED_SYMBOLS, &app.symbols);
}
