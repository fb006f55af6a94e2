//! Keyboard input dispatch — overlays first, then global keys.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use marketdash_core::mode::FilterMode;
use marketdash_core::store::PrefStore;

use crate::app::{AppState, Overlay};
use crate::persistence;

/// Handle a key event, mirroring any preference change to the store.
pub fn handle_key(app: &mut AppState, key: KeyEvent, store: &mut dyn PrefStore) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            app.overlay = Overlay::None;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
        }

        // Filter modes.
        KeyCode::Char('1') => select_mode(app, store, FilterMode::SevenDays),
        KeyCode::Char('2') => select_mode(app, store, FilterMode::OneMonth),
        KeyCode::Char('3') => select_mode(app, store, FilterMode::Custom),
        KeyCode::Char('4') => select_mode(app, store, FilterMode::Live),

        // Legend navigation and visibility.
        KeyCode::Char('j') | KeyCode::Down => app.legend_next(),
        KeyCode::Char('k') | KeyCode::Up => app.legend_prev(),
        KeyCode::Char(' ') => {
            if app.toggle_legend_entry().is_some() {
                persistence::save_hidden(app, store);
                persistence::save_frame(app, store);
            }
        }

        // Shift the custom window by a day; only meaningful in Custom mode.
        KeyCode::Char('h') | KeyCode::Left => nudge_range(app, store, -1),
        KeyCode::Char('l') | KeyCode::Right => nudge_range(app, store, 1),

        _ => {}
    }
}

fn select_mode(app: &mut AppState, store: &mut dyn PrefStore, mode: FilterMode) {
    app.select_mode(mode, Local::now());
    persistence::save_filter(app, store);
}

fn nudge_range(app: &mut AppState, store: &mut dyn PrefStore, days: i64) {
    if app.filter.mode != FilterMode::Custom {
        return;
    }
    app.nudge_custom_range(days);
    persistence::save_filter(app, store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use marketdash_core::domain::Tick;
    use marketdash_core::store::{get_json, keys, MemStore};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> AppState {
        let ticks = vec![
            Tick::new(1_000, "AAPL", 100.0),
            Tick::new(2_000, "GOOG", 200.0),
        ];
        AppState::new(ticks, vec!["AAPL".into(), "GOOG".into()], 20)
    }

    #[test]
    fn q_stops_the_app() {
        let mut app = app();
        let mut store = MemStore::default();
        handle_key(&mut app, press(KeyCode::Char('q')), &mut store);
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut store = MemStore::default();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key, &mut store);
        assert!(app.running);
    }

    #[test]
    fn mode_keys_switch_and_persist() {
        let mut app = app();
        let mut store = MemStore::default();

        handle_key(&mut app, press(KeyCode::Char('1')), &mut store);
        assert_eq!(app.filter.mode, FilterMode::SevenDays);
        assert_eq!(
            get_json::<FilterMode>(&store, keys::FILTER_MODE),
            Some(FilterMode::SevenDays)
        );

        handle_key(&mut app, press(KeyCode::Char('4')), &mut store);
        assert_eq!(app.filter.mode, FilterMode::Live);
    }

    #[test]
    fn space_toggles_and_persists_hidden() {
        let mut app = app();
        let mut store = MemStore::default();
        handle_key(&mut app, press(KeyCode::Char(' ')), &mut store);
        assert!(app.hidden.contains("AAPL"));
        assert_eq!(
            get_json::<Vec<String>>(&store, keys::LIVE_HIDDEN_SYMBOLS),
            Some(vec!["AAPL".to_string()])
        );
    }

    #[test]
    fn nudge_is_ignored_outside_custom_mode() {
        let mut app = app();
        let mut store = MemStore::default();
        handle_key(&mut app, press(KeyCode::Char('h')), &mut store);
        assert_eq!(app.filter.custom_range, None);

        handle_key(&mut app, press(KeyCode::Char('3')), &mut store);
        handle_key(&mut app, press(KeyCode::Char('h')), &mut store);
        assert!(app.filter.custom_range.is_some());
    }

    #[test]
    fn help_overlay_swallows_other_keys() {
        let mut app = app();
        let mut store = MemStore::default();
        handle_key(&mut app, press(KeyCode::Char('?')), &mut store);
        assert_eq!(app.overlay, Overlay::Help);

        handle_key(&mut app, press(KeyCode::Char('1')), &mut store);
        assert_eq!(app.filter.mode, FilterMode::Live);

        handle_key(&mut app, press(KeyCode::Esc), &mut store);
        assert_eq!(app.overlay, Overlay::None);
    }
}
