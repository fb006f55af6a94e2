//! Per-symbol price cards: seeded from the latest historical tick, then
//! advanced by the same subset-sampling policy as the live chart.

use rand::rngs::StdRng;

use crate::data::TickPool;
use crate::domain::CardSnapshot;
use crate::feed::PriceFeed;
use crate::sampling::pick_update_set;

/// One card per symbol, seeded with its most recent tick. Symbols without
/// any data show 0.00 until the feed first touches them.
pub fn init_cards(pool: &TickPool, symbols: &[String]) -> Vec<CardSnapshot> {
    symbols
        .iter()
        .map(|symbol| {
            let price = pool.latest(symbol).map_or(0.0, |t| t.price);
            CardSnapshot {
                symbol: symbol.clone(),
                current_price: price,
                previous_price: price,
            }
        })
        .collect()
}

/// Advance a random subset of cards by one feed sample.
///
/// `previous_price` takes the old `current_price` before the overwrite,
/// so the delta indicator always reflects the latest movement. Untouched
/// cards are returned unchanged.
pub fn update_cards(
    cards: &[CardSnapshot],
    feed: &dyn PriceFeed,
    rng: &mut StdRng,
) -> Vec<CardSnapshot> {
    let symbols: Vec<String> = cards.iter().map(|c| c.symbol.clone()).collect();
    let selected = pick_update_set(&symbols, rng);

    cards
        .iter()
        .map(|card| {
            if selected.iter().any(|s| *s == card.symbol) {
                let next = feed.sample(&card.symbol, Some(card.current_price), rng);
                CardSnapshot {
                    symbol: card.symbol.clone(),
                    previous_price: card.current_price,
                    current_price: next,
                }
            } else {
                card.clone()
            }
        })
        .collect()
}
