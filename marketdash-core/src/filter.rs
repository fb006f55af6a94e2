//! Pure filter engine: range/symbol filtering and calendar-day bucketing.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::domain::{local_datetime, DateRange, Tick};

/// Filter ticks by symbol set and optional inclusive date range.
///
/// Without a range, returns every tick whose symbol is selected,
/// order-preserving. The input is never mutated.
pub fn filter_ticks(ticks: &[Tick], range: Option<&DateRange>, symbols: &[String]) -> Vec<Tick> {
    ticks
        .iter()
        .filter(|tick| symbols.iter().any(|s| s == &tick.symbol))
        .filter(|tick| range.map_or(true, |r| r.contains(tick.timestamp)))
        .cloned()
        .collect()
}

/// One chart point per calendar day per symbol.
///
/// `days` is sorted ascending; every series vector is parallel to it.
/// A missing (symbol, day) combination is `None` — the chart renders a
/// gap there, never a drop to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTable {
    pub days: Vec<NaiveDate>,
    pub labels: Vec<String>,
    /// (symbol, per-day values), in the caller's symbol order.
    pub series: Vec<(String, Vec<Option<f64>>)>,
}

impl DayTable {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Bucket ticks to one value per (symbol, calendar day).
///
/// Time of day is discarded by truncating to local midnight. When several
/// ticks of the same symbol land on the same day, the last one in input
/// order wins.
pub fn bucketize_by_day(ticks: &[Tick], symbols: &[String]) -> DayTable {
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut per_symbol: HashMap<&str, HashMap<NaiveDate, f64>> = HashMap::new();

    for tick in ticks {
        if !symbols.iter().any(|s| s == &tick.symbol) {
            continue;
        }
        let Some(dt) = local_datetime(tick.timestamp) else {
            continue;
        };
        let day = dt.date_naive();
        days.insert(day);
        per_symbol
            .entry(tick.symbol.as_str())
            .or_default()
            .insert(day, tick.price);
    }

    let days: Vec<NaiveDate> = days.into_iter().collect();
    let labels = days.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let series = symbols
        .iter()
        .map(|symbol| {
            let buckets = per_symbol.get(symbol.as_str());
            let values = days
                .iter()
                .map(|day| buckets.and_then(|b| b.get(day).copied()))
                .collect();
            (symbol.clone(), values)
        })
        .collect();

    DayTable { days, labels, series }
}
