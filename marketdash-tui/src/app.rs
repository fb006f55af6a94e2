//! Application state — single-owner, main-thread only.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use marketdash_core::cards::init_cards;
use marketdash_core::data::{time_bounds, TickPool};
use marketdash_core::domain::{CardSnapshot, DateRange, Tick};
use marketdash_core::live::ChartFrame;
use marketdash_core::mode::{FilterMode, FilterState};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    // Data
    pub ticks: Vec<Tick>,
    pub pool: TickPool,
    pub symbols: Vec<String>,
    /// Set when the tick file could not be loaded; shown once, no retry.
    pub load_error: Option<String>,

    // Views
    pub cards: Vec<CardSnapshot>,
    pub frame: ChartFrame,
    pub filter: FilterState,
    pub hidden: HashSet<String>,
    pub legend_cursor: usize,
    pub max_points: usize,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    /// Info notices clear themselves; warnings and errors stay put.
    pub status_expires: Option<Instant>,
    pub overlay: Overlay,
    pub running: bool,
}

impl AppState {
    pub fn new(ticks: Vec<Tick>, symbols: Vec<String>, max_points: usize) -> Self {
        let pool = TickPool::build(&ticks);
        let cards = init_cards(&pool, &symbols);
        let frame = ChartFrame::initialize(&symbols);
        Self {
            ticks,
            pool,
            symbols,
            load_error: None,
            cards,
            frame,
            filter: FilterState::default(),
            hidden: HashSet::new(),
            legend_cursor: 0,
            max_points,
            status_message: None,
            status_expires: None,
            overlay: Overlay::None,
            running: true,
        }
    }

    /// Select a temporal filter mode and return the newly active range.
    pub fn select_mode(&mut self, mode: FilterMode, now: DateTime<Local>) -> Option<DateRange> {
        let range = self.filter.select(mode, now);
        match range {
            Some(_) => self.set_status(format!("Filtering: {}", mode.label())),
            None => self.set_status("Live view"),
        }
        range
    }

    /// Toggle visibility of the series under the legend cursor.
    /// Returns the toggled symbol, if any.
    pub fn toggle_legend_entry(&mut self) -> Option<String> {
        let symbol = self.symbols.get(self.legend_cursor)?.clone();
        if !self.hidden.remove(&symbol) {
            self.hidden.insert(symbol.clone());
        }
        self.sync_hidden_flags();
        Some(symbol)
    }

    /// Mirror the hidden set onto the live frame's series flags, which is
    /// what gets persisted with the frame snapshot.
    pub fn sync_hidden_flags(&mut self) {
        for series in &mut self.frame.series {
            series.hidden = self.hidden.contains(&series.label);
        }
    }

    pub fn legend_next(&mut self) {
        if !self.symbols.is_empty() && self.legend_cursor + 1 < self.symbols.len() {
            self.legend_cursor += 1;
        }
    }

    pub fn legend_prev(&mut self) {
        self.legend_cursor = self.legend_cursor.saturating_sub(1);
    }

    /// Symbols currently plotted (selected minus hidden).
    pub fn visible_symbols(&self) -> Vec<String> {
        self.symbols
            .iter()
            .filter(|s| !self.hidden.contains(*s))
            .cloned()
            .collect()
    }

    /// Shift the custom range by whole days, clamped to the data span.
    /// Seeds the range from the full data span on first use.
    pub fn nudge_custom_range(&mut self, days: i64) {
        const DAY_MS: i64 = 24 * 60 * 60 * 1000;
        let Some((min, max)) = time_bounds(&self.ticks) else {
            return;
        };
        let current = self
            .filter
            .custom_range
            .unwrap_or(DateRange::new(min, max));
        let shift = days * DAY_MS;
        let from = (current.from + shift).clamp(min, max);
        let to = (current.to + shift).clamp(min, max);
        if from <= to {
            self.filter.set_custom_range(Some(DateRange::new(from, to)));
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
        self.status_expires = Some(Instant::now() + Duration::from_secs(3));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
        self.status_expires = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
        self.status_expires = None;
    }

    /// Clear an info notice once its display window has passed.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status_expires.is_some_and(|deadline| now >= deadline) {
            self.status_message = None;
            self.status_expires = None;
        }
    }
}
