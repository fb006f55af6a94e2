//! Temporal filter state machine.
//!
//! Four modes, transitions on explicit user selection only. The quick
//! modes (7 days / 1 month) compute a concrete trailing range and store
//! it as the new custom baseline; live mode emits no range at all, and
//! the presentation layer treats "no active range" as live.

use chrono::{DateTime, Duration, Local, Months};
use serde::{Deserialize, Serialize};

use crate::domain::DateRange;

/// Which temporal filter is active. Serialized values match the persisted
/// key space of the browser build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "live")]
    Live,
}

impl FilterMode {
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::SevenDays => "7 days",
            FilterMode::OneMonth => "1 month",
            FilterMode::Custom => "Custom",
            FilterMode::Live => "Live",
        }
    }

    pub const ALL: [FilterMode; 4] = [
        FilterMode::SevenDays,
        FilterMode::OneMonth,
        FilterMode::Custom,
        FilterMode::Live,
    ];
}

/// Active mode plus the persisted custom baseline range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub mode: FilterMode,
    pub custom_range: Option<DateRange>,
}

impl Default for FilterState {
    /// First launch shows the live chart: live mode, no active range.
    fn default() -> Self {
        Self {
            mode: FilterMode::Live,
            custom_range: None,
        }
    }
}

impl FilterState {
    /// Apply an explicit mode selection and return the newly active range.
    ///
    /// Quick modes overwrite the custom baseline with their trailing
    /// range; live leaves the baseline untouched so switching back to
    /// custom restores it.
    pub fn select(&mut self, mode: FilterMode, now: DateTime<Local>) -> Option<DateRange> {
        self.mode = mode;
        match mode {
            FilterMode::SevenDays => {
                let range = trailing_days(now, 7);
                self.custom_range = Some(range);
                Some(range)
            }
            FilterMode::OneMonth => {
                let range = trailing_month(now);
                self.custom_range = Some(range);
                Some(range)
            }
            FilterMode::Custom => self.custom_range,
            FilterMode::Live => None,
        }
    }

    /// The range the presentation layer should filter by. `None` means
    /// live mode (or custom with no stored baseline yet).
    pub fn active_range(&self) -> Option<DateRange> {
        match self.mode {
            FilterMode::Live => None,
            _ => self.custom_range,
        }
    }

    pub fn set_custom_range(&mut self, range: Option<DateRange>) {
        self.custom_range = range;
    }
}

fn trailing_days(now: DateTime<Local>, days: i64) -> DateRange {
    let to = now.timestamp_millis();
    let from = (now - Duration::days(days)).timestamp_millis();
    DateRange::new(from, to)
}

fn trailing_month(now: DateTime<Local>) -> DateRange {
    let to = now.timestamp_millis();
    // Calendar month when representable, 30 days otherwise (e.g. Mar 31).
    let from = now
        .checked_sub_months(Months::new(1))
        .unwrap_or(now - Duration::days(30))
        .timestamp_millis();
    DateRange::new(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn default_is_live_without_range() {
        let state = FilterState::default();
        assert_eq!(state.mode, FilterMode::Live);
        assert_eq!(state.active_range(), None);
    }

    #[test]
    fn seven_days_emits_trailing_week_and_stores_baseline() {
        let mut state = FilterState::default();
        let now = Local::now();
        let range = state.select(FilterMode::SevenDays, now).unwrap();

        assert_eq!(range.to, now.timestamp_millis());
        assert_eq!(range.to - range.from, 7 * DAY_MS);
        assert_eq!(state.custom_range, Some(range));
    }

    #[test]
    fn one_month_spans_roughly_a_month() {
        let mut state = FilterState::default();
        let now = Local::now();
        let range = state.select(FilterMode::OneMonth, now).unwrap();

        let span_days = (range.to - range.from) / DAY_MS;
        assert!((28..=31).contains(&span_days));
    }

    #[test]
    fn custom_emits_stored_baseline() {
        let mut state = FilterState::default();
        let now = Local::now();

        // No baseline yet: custom emits nothing.
        assert_eq!(state.select(FilterMode::Custom, now), None);

        let quick = state.select(FilterMode::SevenDays, now).unwrap();
        assert_eq!(state.select(FilterMode::Custom, now), Some(quick));
    }

    #[test]
    fn live_emits_no_range_but_keeps_baseline() {
        let mut state = FilterState::default();
        let now = Local::now();
        let quick = state.select(FilterMode::SevenDays, now).unwrap();

        assert_eq!(state.select(FilterMode::Live, now), None);
        assert_eq!(state.active_range(), None);
        assert_eq!(state.custom_range, Some(quick));
    }

    #[test]
    fn mode_serializes_to_browser_key_values() {
        assert_eq!(
            serde_json::to_string(&FilterMode::SevenDays).unwrap(),
            "\"7days\""
        );
        assert_eq!(
            serde_json::to_string(&FilterMode::OneMonth).unwrap(),
            "\"1month\""
        );
        assert_eq!(serde_json::to_string(&FilterMode::Live).unwrap(), "\"live\"");
    }
}
