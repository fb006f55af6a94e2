//! Poll-based period timer.
//!
//! The TUI loop polls input with a short timeout; each iteration asks its
//! tickers whether a period has elapsed. Dropping the loop drops the
//! tickers — nothing to cancel, nothing leaks.

use std::time::{Duration, Instant};

/// Fires at most once per period when polled.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First firing is one full period from now.
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// True when a period has elapsed. The next deadline advances from
    /// `now`, not from the missed deadline — a stalled loop produces one
    /// tick, not a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_fire_before_period() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_millis(100), start);
        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(99)));
    }

    #[test]
    fn fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_millis(100), start);

        let t1 = start + Duration::from_millis(100);
        assert!(ticker.poll(t1));
        assert!(!ticker.poll(t1));
        assert!(!ticker.poll(t1 + Duration::from_millis(50)));
        assert!(ticker.poll(t1 + Duration::from_millis(100)));
    }

    #[test]
    fn stalled_loop_produces_single_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_millis(100), start);

        // Loop stalls for five periods.
        let late = start + Duration::from_millis(500);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late + Duration::from_millis(99)));
        assert!(ticker.poll(late + Duration::from_millis(100)));
    }
}
