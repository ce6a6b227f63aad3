use chrono::NaiveDate;
use marea_core::{Bar, DateRange, Series, Symbol};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn bar(date: NaiveDate, close: f64) -> Bar {
    Bar {
        date,
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: Some(1_000),
    }
}

#[test]
fn from_bars_sorts_and_keeps_first_on_duplicate_dates() {
    let series = Series::from_bars(vec![
        bar(d(2023, 8, 3), 30.0),
        bar(d(2023, 8, 1), 10.0),
        bar(d(2023, 8, 3), 99.0),
        bar(d(2023, 8, 2), 20.0),
    ]);
    let dates: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![d(2023, 8, 1), d(2023, 8, 2), d(2023, 8, 3)]);
    assert_eq!(series.bars()[2].close, 30.0);
}

#[test]
fn last_date_is_the_maximum() {
    let series = Series::from_bars(vec![bar(d(2023, 8, 2), 1.0), bar(d(2023, 8, 1), 2.0)]);
    assert_eq!(series.last_date(), Some(d(2023, 8, 2)));
    assert_eq!(Series::default().last_date(), None);
}

#[test]
fn date_range_is_half_open() {
    let range = DateRange::new(d(2023, 8, 1), d(2023, 8, 3));
    assert!(range.contains(d(2023, 8, 1)));
    assert!(range.contains(d(2023, 8, 2)));
    assert!(!range.contains(d(2023, 8, 3)));
    assert!(!range.is_empty());
}

#[test]
fn equal_bounds_make_an_empty_range() {
    let range = DateRange::new(d(2023, 8, 1), d(2023, 8, 1));
    assert!(range.is_empty());
    assert!(!range.contains(d(2023, 8, 1)));
}

#[test]
fn inverted_bounds_make_an_empty_range() {
    assert!(DateRange::new(d(2023, 8, 2), d(2023, 8, 1)).is_empty());
}

#[test]
fn symbol_rejects_empty_input() {
    assert!(Symbol::new("").is_err());
    assert!(Symbol::new("   ").is_err());
    assert_eq!(Symbol::new("GC=F").unwrap().as_str(), "GC=F");
}
