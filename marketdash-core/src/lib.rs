//! MarketDash Core — dashboard engine: tick data, filtering, live simulation.
//!
//! This crate contains everything below the terminal UI:
//! - Domain types (ticks, date ranges, card snapshots)
//! - Tick file loading and per-symbol pooling
//! - Pure filter engine (range/symbol filtering, calendar-day bucketing)
//! - Price feeds (historical replay, synthetic random walk)
//! - The rolling live chart buffer and its advance transform
//! - Temporal filter state machine
//! - Poll-based tickers and the injected preference store

pub mod cards;
pub mod data;
pub mod domain;
pub mod feed;
pub mod filter;
pub mod live;
pub mod mode;
pub mod sampling;
pub mod store;
pub mod ticker;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types handed across module seams are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Tick>();
        require_sync::<domain::Tick>();
        require_send::<domain::DateRange>();
        require_sync::<domain::DateRange>();
        require_send::<domain::CardSnapshot>();
        require_sync::<domain::CardSnapshot>();

        require_send::<data::TickPool>();
        require_sync::<data::TickPool>();

        require_send::<live::ChartFrame>();
        require_sync::<live::ChartFrame>();
        require_send::<live::SeriesBuffer>();
        require_sync::<live::SeriesBuffer>();

        require_send::<mode::FilterMode>();
        require_sync::<mode::FilterMode>();
        require_send::<mode::FilterState>();
        require_sync::<mode::FilterState>();

        require_send::<feed::SyntheticFeed>();
        require_sync::<feed::SyntheticFeed>();

        require_send::<store::JsonFileStore>();
        require_sync::<store::JsonFileStore>();
        require_send::<store::MemStore>();
        require_sync::<store::MemStore>();

        require_send::<ticker::Ticker>();
        require_sync::<ticker::Ticker>();
    }
}
