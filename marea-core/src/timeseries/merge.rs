use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::Bar;

/// Merge bars from multiple series in priority order (first is highest).
///
/// - Bars are keyed by `date`; the first appearance wins for duplicates.
/// - Bars are returned sorted ascending by date.
///
/// The synchronizer relies on these semantics to append delta results
/// without ever reintroducing a date the local series already holds.
#[must_use]
pub fn merge_bars_by_priority<I>(series: I) -> Vec<Bar>
where
    I: IntoIterator<Item = Vec<Bar>>,
{
    let mut map: BTreeMap<NaiveDate, Bar> = BTreeMap::new();
    for s in series {
        for b in s {
            map.entry(b.date).or_insert(b);
        }
    }
    map.into_values().collect()
}

/// Keep only bars dated strictly after `cutoff`.
///
/// Sources that are inclusive of the requested start date, or that return
/// coarser-than-day granularity overlapping it, would otherwise reintroduce
/// the boundary record.
#[must_use]
pub fn strictly_after(bars: Vec<Bar>, cutoff: NaiveDate) -> Vec<Bar> {
    bars.into_iter().filter(|b| b.date > cutoff).collect()
}
