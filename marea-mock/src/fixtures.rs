use chrono::{Days, NaiveDate};
use marea_core::Bar;

/// Build one daily bar per entry in `closes`, starting at `start`.
///
/// Open/high/low are derived from the close so fixtures stay readable;
/// volume is a stable non-zero value.
#[must_use]
pub fn daily_bars(start: NaiveDate, closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .filter_map(|(i, &close)| {
            let date = start.checked_add_days(Days::new(i as u64))?;
            Some(Bar {
                date,
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: Some(10_000 + i as u64),
            })
        })
        .collect()
}
