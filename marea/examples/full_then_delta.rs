//! Seed a CSV store with a full load, then keep it current with delta loads.
//!
//! Run with: `cargo run -p marea --example full_then_delta`

use std::sync::Arc;

use chrono::NaiveDate;
use marea::{Marea, MareaError, Symbol};
use marea_csv::CsvStore;
use marea_mock::{FixedClock, MockSource, daily_bars};

#[tokio::main]
async fn main() -> Result<(), MareaError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let start = NaiveDate::from_ymd_opt(2023, 7, 24).expect("valid date");
    let today = NaiveDate::from_ymd_opt(2023, 7, 28).expect("valid date");

    let source = MockSource::new();
    let gold = Symbol::new("GC=F")?;
    source
        .set_bars(
            gold.clone(),
            daily_bars(start, &[1_960.2, 1_963.7, 1_970.1, 1_945.5, 1_959.8]),
        )
        .await;

    let dir = std::env::temp_dir().join("marea-example-store");
    let clock = Arc::new(FixedClock::new(today));
    let marea = Marea::builder()
        .with_source(Arc::new(source.clone()))
        .with_store(Arc::new(CsvStore::new(&dir)))
        .with_clock(clock.clone())
        .symbols(vec![gold.clone()])
        .history_start(start)
        .build()?;

    // First run: no local series yet, so the batch performs a full load.
    let report = marea.sync_all().await?;
    println!("first run:  {:?}", report.outcome_for(&gold));

    // A day later the source has one more session.
    clock.advance_days(1);
    source
        .set_bars(
            gold.clone(),
            daily_bars(start, &[1_960.2, 1_963.7, 1_970.1, 1_945.5, 1_959.8, 1_962.3]),
        )
        .await;

    // Second run: only the missing day is fetched and appended.
    let report = marea.sync_all().await?;
    println!("second run: {:?}", report.outcome_for(&gold));
    println!("store dir:  {}", dir.display());

    Ok(())
}
