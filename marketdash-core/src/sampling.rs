//! Random subset selection for partial market updates.
//!
//! Each timer firing updates only 1..=3 symbols, simulating staggered
//! market activity instead of synchronous ticks across the whole board.

use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on symbols updated per tick.
pub const MAX_UPDATES_PER_TICK: usize = 3;

/// Pick a uniform random non-empty subset of symbols to update this tick.
pub fn pick_update_set<'a, R: Rng>(symbols: &'a [String], rng: &mut R) -> Vec<&'a str> {
    if symbols.is_empty() {
        return Vec::new();
    }
    let count = rng
        .gen_range(1..=MAX_UPDATES_PER_TICK)
        .min(symbols.len());
    symbols
        .choose_multiple(rng, count)
        .map(|s| s.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn symbols() -> Vec<String> {
        vec!["AAPL".into(), "GOOG".into(), "MSFT".into(), "TSLA".into()]
    }

    #[test]
    fn picks_between_one_and_three() {
        let symbols = symbols();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = pick_update_set(&symbols, &mut rng);
            assert!((1..=MAX_UPDATES_PER_TICK).contains(&picked.len()));
        }
    }

    #[test]
    fn picked_are_distinct_members() {
        let symbols = symbols();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let picked = pick_update_set(&symbols, &mut rng);
            let mut dedup = picked.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), picked.len());
            assert!(picked.iter().all(|p| symbols.iter().any(|s| s == p)));
        }
    }

    #[test]
    fn count_clamps_to_available_symbols() {
        let one = vec!["AAPL".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(pick_update_set(&one, &mut rng).len(), 1);
        }
    }

    #[test]
    fn empty_input_picks_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_update_set(&[], &mut rng).is_empty());
    }
}
