use chrono::{Days, NaiveDate};
use marea_core::{Bar, Series, merge_bars_by_priority, strictly_after};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn bar(date: NaiveDate, close: f64) -> Bar {
    Bar {
        date,
        open: close,
        high: close,
        low: close,
        close,
        volume: None,
    }
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|d| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(d))
            .unwrap()
    })
}

fn arb_bars() -> impl Strategy<Value = Vec<Bar>> {
    proptest::collection::vec((arb_date(), 0i64..100_000i64), 0..200).prop_map(|v| {
        v.into_iter()
            .map(|(d, cents)| bar(d, cents as f64 / 100.0))
            .collect()
    })
}

proptest! {
    #[test]
    fn merged_output_is_sorted_and_deduplicated(
        series in proptest::collection::vec(arb_bars(), 0..5)
    ) {
        let merged = merge_bars_by_priority(series);
        for w in merged.windows(2) {
            prop_assert!(w[0].date < w[1].date);
        }
    }

    #[test]
    fn first_series_wins_on_collisions(
        series in proptest::collection::vec(arb_bars(), 0..5)
    ) {
        let mut first_by_date: BTreeMap<NaiveDate, Bar> = BTreeMap::new();
        for s in &series {
            for b in s {
                first_by_date.entry(b.date).or_insert_with(|| b.clone());
            }
        }
        let merged = merge_bars_by_priority(series);
        prop_assert_eq!(merged.len(), first_by_date.len());
        for b in &merged {
            let exp = &first_by_date[&b.date];
            prop_assert_eq!(b.close, exp.close);
        }
    }

    #[test]
    fn merge_is_idempotent(bars in arb_bars()) {
        let once = merge_bars_by_priority([bars]);
        let twice = merge_bars_by_priority([once.clone()]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn strictly_after_drops_boundary_and_older(bars in arb_bars(), cutoff in arb_date()) {
        let expected = bars.iter().filter(|b| b.date > cutoff).count();
        let kept = strictly_after(bars, cutoff);
        prop_assert!(kept.iter().all(|b| b.date > cutoff));
        prop_assert_eq!(kept.len(), expected);
    }

    #[test]
    fn series_normalization_matches_merge(bars in arb_bars()) {
        let series = Series::from_bars(bars.clone());
        prop_assert_eq!(series.into_bars(), merge_bars_by_priority([bars]));
    }
}
