//! Price feeds — where new live values come from.
//!
//! The `PriceFeed` trait abstracts the value source so the simulator does
//! not branch on data availability inline: `ReplayFeed` draws from the
//! historical pool, `SyntheticFeed` is a pure random walk, and either can
//! be swapped in for tests.

use rand::rngs::StdRng;
use rand::Rng;

use crate::data::TickPool;

/// Seed range for a series with no history at all.
pub const SEED_PRICE_RANGE: (f64, f64) = (100.0, 200.0);

/// A source of new prices for the live simulation. Never fails: feeds
/// degrade rather than error when data is missing.
pub trait PriceFeed {
    /// Produce the next price for `symbol`, given the last plotted value.
    fn sample(&self, symbol: &str, last: Option<f64>, rng: &mut StdRng) -> f64;
}

/// Pure random walk: bounded random delta from the last value, seeded
/// uniformly in `[100, 200)` when there is no last value.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticFeed {
    /// Largest absolute step per sample.
    pub max_step: f64,
}

impl Default for SyntheticFeed {
    fn default() -> Self {
        Self { max_step: 2.0 }
    }
}

impl PriceFeed for SyntheticFeed {
    fn sample(&self, _symbol: &str, last: Option<f64>, rng: &mut StdRng) -> f64 {
        match last {
            Some(value) => (value + rng.gen_range(-self.max_step..=self.max_step)).max(0.0),
            None => rng.gen_range(SEED_PRICE_RANGE.0..SEED_PRICE_RANGE.1),
        }
    }
}

/// Draws a price uniformly at random from the symbol's historical pool.
/// Symbols without any pooled ticks fall back to the synthetic walk.
pub struct ReplayFeed<'a> {
    pool: &'a TickPool,
    fallback: SyntheticFeed,
}

impl<'a> ReplayFeed<'a> {
    pub fn new(pool: &'a TickPool) -> Self {
        Self {
            pool,
            fallback: SyntheticFeed::default(),
        }
    }
}

impl PriceFeed for ReplayFeed<'_> {
    fn sample(&self, symbol: &str, last: Option<f64>, rng: &mut StdRng) -> f64 {
        match self.pool.get(symbol) {
            Some(ticks) if !ticks.is_empty() => {
                let idx = rng.gen_range(0..ticks.len());
                ticks[idx].price
            }
            _ => self.fallback.sample(symbol, last, rng),
        }
    }
}
