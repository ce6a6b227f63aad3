use chrono::NaiveDate;
use marea_core::{Bar, Series, SeriesStore, Symbol};
use marea_csv::CsvStore;
use tempfile::TempDir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn bar(date: NaiveDate, close: f64, volume: Option<u64>) -> Bar {
    Bar {
        date,
        open: close - 0.25,
        high: close + 0.5,
        low: close - 0.5,
        close,
        volume,
    }
}

#[tokio::test]
async fn read_missing_symbol_is_none() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path());
    let got = store.read(&Symbol::new("AAPL").unwrap()).await.unwrap();
    assert!(got.is_none());
}

#[tokio::test]
async fn write_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path());
    let symbol = Symbol::new("AAPL").unwrap();

    let series = Series::from_bars(vec![
        bar(d(2023, 8, 1), 100.0, Some(5_000)),
        bar(d(2023, 8, 2), 101.5, None),
    ]);
    store.write(&symbol, &series).await.unwrap();

    let got = store.read(&symbol).await.unwrap().unwrap();
    assert_eq!(got.bars(), series.bars());
}

#[tokio::test]
async fn write_overwrites_previous_series() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path());
    let symbol = Symbol::new("MSFT").unwrap();

    let first = Series::from_bars(vec![bar(d(2023, 8, 1), 10.0, None)]);
    store.write(&symbol, &first).await.unwrap();

    let second = Series::from_bars(vec![
        bar(d(2023, 8, 1), 10.0, None),
        bar(d(2023, 8, 2), 11.0, None),
    ]);
    store.write(&symbol, &second).await.unwrap();

    let got = store.read(&symbol).await.unwrap().unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got.last_date(), Some(d(2023, 8, 2)));
}

#[tokio::test]
async fn futures_style_symbols_map_to_distinct_files() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path());

    let gold = Symbol::new("GC=F").unwrap();
    let dollar = Symbol::new("DX-Y.NYB").unwrap();
    store
        .write(&gold, &Series::from_bars(vec![bar(d(2023, 8, 1), 1_950.0, None)]))
        .await
        .unwrap();
    store
        .write(&dollar, &Series::from_bars(vec![bar(d(2023, 8, 1), 102.3, None)]))
        .await
        .unwrap();

    assert_ne!(store.path_for(&gold), store.path_for(&dollar));
    assert_eq!(store.read(&gold).await.unwrap().unwrap().bars()[0].close, 1_950.0);
    assert_eq!(store.read(&dollar).await.unwrap().unwrap().bars()[0].close, 102.3);
}

#[tokio::test]
async fn path_separator_in_symbol_stays_inside_store_dir() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path());
    let symbol = Symbol::new("BRK/B").unwrap();

    let path = store.path_for(&symbol);
    assert_eq!(path.parent(), Some(dir.path()));

    let series = Series::from_bars(vec![bar(d(2023, 8, 1), 350.0, None)]);
    store.write(&symbol, &series).await.unwrap();
    let got = store.read(&symbol).await.unwrap().unwrap();
    assert_eq!(got.bars(), series.bars());
}

#[tokio::test]
async fn out_of_order_rows_are_normalized_on_read() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("TLT.csv"),
        "date,open,high,low,close,volume\n\
         2023-08-03,99.0,99.5,98.5,99.2,\n\
         2023-08-01,98.0,98.5,97.5,98.2,1200\n\
         2023-08-03,0.0,0.0,0.0,0.0,\n",
    )
    .unwrap();

    let store = CsvStore::new(dir.path());
    let got = store.read(&Symbol::new("TLT").unwrap()).await.unwrap().unwrap();
    let dates: Vec<NaiveDate> = got.bars().iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![d(2023, 8, 1), d(2023, 8, 3)]);
    assert_eq!(got.bars()[1].close, 99.2);
}
