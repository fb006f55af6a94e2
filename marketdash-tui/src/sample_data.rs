//! Built-in sample tick history, used when no data file is given.
//!
//! Produces a noisy random walk per symbol over the last ~45 days with a
//! handful of intraday points per day. Uses a linear congruential generator
//! so the output is reproducible and gets no entropy from `rand`.

use chrono::{Duration, Local};

use marketdash_core::domain::Tick;

const DAYS: i64 = 45;
const POINTS_PER_DAY: i64 = 4;

/// Per-symbol (start price, drift, volatility).
const PROFILES: [(&str, f64, f64, f64); 3] = [
    ("AAPL", 180.0, 0.0004, 0.010),
    ("GOOG", 140.0, 0.0006, 0.013),
    ("MSFT", 390.0, 0.0003, 0.008),
];

/// Generate sample ticks ending at `now`, oldest first.
pub fn sample_ticks() -> Vec<Tick> {
    let now = Local::now();
    let mut ticks = Vec::new();

    for (i, (symbol, start, drift, volatility)) in PROFILES.iter().enumerate() {
        let mut price = *start;
        let mut rng_state = 0x9e37_79b9 + i as u64;

        for day in (0..DAYS).rev() {
            for slot in 0..POINTS_PER_DAY {
                // LCG producing values in [-1, 1]
                rng_state = rng_state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let u = ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0;

                price *= 1.0 + drift + volatility * u;
                price = price.max(1.0);

                let at = now - Duration::days(day) - Duration::hours(6 - slot * 2);
                ticks.push(Tick::new(at.timestamp_millis(), *symbol, price));
            }
        }
    }

    ticks.sort_by_key(|t| t.timestamp);
    ticks
}
