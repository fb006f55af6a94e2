//! The rolling live chart buffer and its advance transform.
//!
//! `advance` is a pure `(frame) -> frame` step: the TUI's ticker decides
//! *when* it runs, this module decides *what* it does. That keeps the
//! buffer logic independently testable without any timer in sight.

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::feed::PriceFeed;
use crate::sampling::pick_update_set;

/// Cyclic series palette, assigned by symbol index.
pub const PALETTE: [(u8, u8, u8); 5] = [
    (75, 192, 192),
    (192, 75, 192),
    (192, 192, 75),
    (75, 75, 192),
    (192, 75, 75),
];

/// Carried forward when an unselected series has no previous value yet.
const CARRY_BASE: f64 = 100.0;

/// One plotted line: bounded, append-then-trim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBuffer {
    pub label: String,
    pub points: Vec<f64>,
    pub color: (u8, u8, u8),
    pub hidden: bool,
}

/// Labels plus all series buffers handed to the chart.
///
/// Invariant: every series' `points.len()` equals `labels.len()` at all
/// times, and both stay at or below the configured maximum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartFrame {
    pub labels: Vec<String>,
    pub series: Vec<SeriesBuffer>,
}

impl ChartFrame {
    /// Empty frame with one series per symbol and deterministic colors.
    pub fn initialize(symbols: &[String]) -> Self {
        let series = symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| SeriesBuffer {
                label: symbol.clone(),
                points: Vec::new(),
                color: PALETTE[index % PALETTE.len()],
                hidden: false,
            })
            .collect();
        Self {
            labels: Vec::new(),
            series,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Drop the oldest entries until at most `max_points` remain.
    ///
    /// All overflow goes at once; after any trim the length is exactly
    /// `min(len, max_points)`. Also used when rehydrating a persisted
    /// frame under a smaller maximum.
    pub fn trim_to(&mut self, max_points: usize) {
        if self.labels.len() <= max_points {
            return;
        }
        let excess = self.labels.len() - max_points;
        self.labels.drain(0..excess);
        for series in &mut self.series {
            let over = series.points.len().saturating_sub(max_points);
            series.points.drain(0..over);
        }
    }
}

/// Advance the frame by one simulated tick.
///
/// A random subset of 1..=3 symbols takes a fresh feed sample; every other
/// series carries its previous value forward, so no series ever shrinks or
/// gaps. The wall-clock label is `HH:MM:SS`, 24-hour local time.
pub fn advance(
    frame: &ChartFrame,
    feed: &dyn PriceFeed,
    max_points: usize,
    rng: &mut StdRng,
    now: DateTime<Local>,
) -> ChartFrame {
    let mut next = frame.clone();

    let symbols: Vec<String> = next.series.iter().map(|s| s.label.clone()).collect();
    let selected = pick_update_set(&symbols, rng);

    for series in &mut next.series {
        let last = series.points.last().copied();
        let value = if selected.iter().any(|s| *s == series.label) {
            feed.sample(&series.label, last, rng)
        } else {
            last.unwrap_or(CARRY_BASE)
        };
        series.points.push(value);
    }

    next.labels.push(now.format("%H:%M:%S").to_string());
    next.trim_to(max_points);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TickPool;
    use crate::domain::Tick;
    use crate::feed::{ReplayFeed, SyntheticFeed};
    use rand::SeedableRng;

    fn symbols() -> Vec<String> {
        vec!["AAPL".into(), "GOOG".into(), "MSFT".into()]
    }

    fn assert_invariant(frame: &ChartFrame, max_points: usize) {
        assert!(frame.labels.len() <= max_points);
        for series in &frame.series {
            assert_eq!(series.points.len(), frame.labels.len());
        }
    }

    #[test]
    fn initialize_assigns_cyclic_palette() {
        let many: Vec<String> = (0..7).map(|i| format!("S{i}")).collect();
        let frame = ChartFrame::initialize(&many);
        assert_eq!(frame.series[0].color, PALETTE[0]);
        assert_eq!(frame.series[5].color, PALETTE[0]);
        assert_eq!(frame.series[6].color, PALETTE[1]);
        assert!(frame.is_empty());
    }

    #[test]
    fn invariant_holds_over_many_ticks() {
        let frame = ChartFrame::initialize(&symbols());
        let feed = SyntheticFeed::default();
        let mut rng = StdRng::seed_from_u64(21);
        let now = Local::now();

        let mut current = frame;
        for _ in 0..50 {
            current = advance(&current, &feed, 20, &mut rng, now);
            assert_invariant(&current, 20);
        }
        assert_eq!(current.len(), 20);
    }

    // With max_points=3, the 4th tick must land back on 3.
    #[test]
    fn eviction_drops_all_overflow_at_once() {
        let feed = SyntheticFeed::default();
        let mut rng = StdRng::seed_from_u64(8);
        let now = Local::now();

        let mut frame = ChartFrame::initialize(&symbols());
        for _ in 0..3 {
            frame = advance(&frame, &feed, 3, &mut rng, now);
        }
        assert_eq!(frame.len(), 3);

        frame = advance(&frame, &feed, 3, &mut rng, now);
        assert_eq!(frame.len(), 3);
        assert_invariant(&frame, 3);
    }

    #[test]
    fn trim_recovers_oversized_rehydrated_frame() {
        let feed = SyntheticFeed::default();
        let mut rng = StdRng::seed_from_u64(8);
        let now = Local::now();

        let mut frame = ChartFrame::initialize(&symbols());
        for _ in 0..10 {
            frame = advance(&frame, &feed, 10, &mut rng, now);
        }
        // Rehydrated under a smaller maximum.
        frame.trim_to(4);
        assert_eq!(frame.len(), 4);
        assert_invariant(&frame, 4);
    }

    #[test]
    fn trim_keeps_newest_points() {
        let mut frame = ChartFrame::initialize(&["AAPL".to_string()]);
        frame.labels = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        frame.series[0].points = vec![1.0, 2.0, 3.0, 4.0];
        frame.trim_to(2);
        assert_eq!(frame.labels, vec!["c".to_string(), "d".to_string()]);
        assert_eq!(frame.series[0].points, vec![3.0, 4.0]);
    }

    /// Feed that always returns the same sentinel, so carries are visible.
    struct SentinelFeed;

    impl PriceFeed for SentinelFeed {
        fn sample(&self, _symbol: &str, _last: Option<f64>, _rng: &mut StdRng) -> f64 {
            999.0
        }
    }

    #[test]
    fn unselected_series_carry_previous_value() {
        let mut rng = StdRng::seed_from_u64(13);
        let now = Local::now();

        let mut frame = ChartFrame::initialize(&symbols());
        for _ in 0..30 {
            let prev = frame.clone();
            frame = advance(&frame, &SentinelFeed, 100, &mut rng, now);
            for (before, after) in prev.series.iter().zip(&frame.series) {
                assert_eq!(after.points.len(), before.points.len() + 1);
                let new = *after.points.last().unwrap();
                match before.points.last() {
                    // Fresh sample or an exact carry of the last value.
                    Some(last) => assert!(new == 999.0 || new == *last),
                    // First tick: sample or the carry base.
                    None => assert!(new == 999.0 || new == CARRY_BASE),
                }
            }
        }
    }

    #[test]
    fn replay_feed_values_come_from_pool() {
        let ticks = vec![
            Tick::new(1, "AAPL", 111.0),
            Tick::new(2, "GOOG", 222.0),
            Tick::new(3, "MSFT", 333.0),
        ];
        let pool = TickPool::build(&ticks);
        let feed = ReplayFeed::new(&pool);
        let mut rng = StdRng::seed_from_u64(17);
        let now = Local::now();

        let mut frame = ChartFrame::initialize(&symbols());
        for _ in 0..40 {
            frame = advance(&frame, &feed, 40, &mut rng, now);
        }
        // Every plotted value is either a pool price or the carry base.
        for series in &frame.series {
            let own = match series.label.as_str() {
                "AAPL" => 111.0,
                "GOOG" => 222.0,
                _ => 333.0,
            };
            for point in &series.points {
                assert!(*point == own || *point == CARRY_BASE);
            }
        }
    }

    #[test]
    fn label_is_wall_clock_hms() {
        let feed = SyntheticFeed::default();
        let mut rng = StdRng::seed_from_u64(1);
        let now = Local::now();
        let frame = advance(&ChartFrame::initialize(&symbols()), &feed, 10, &mut rng, now);
        let label = &frame.labels[0];
        assert_eq!(label.len(), 8);
        assert_eq!(label.as_bytes()[2], b':');
        assert_eq!(label.as_bytes()[5], b':');
    }

    #[test]
    fn frame_survives_serde_roundtrip() {
        let feed = SyntheticFeed::default();
        let mut rng = StdRng::seed_from_u64(33);
        let now = Local::now();
        let mut frame = ChartFrame::initialize(&symbols());
        for _ in 0..5 {
            frame = advance(&frame, &feed, 20, &mut rng, now);
        }
        let json = serde_json::to_string(&frame).unwrap();
        let back: ChartFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
