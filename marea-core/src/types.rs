//! Common data structures used across the marea workspace.

use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MareaError;

/// Identifier for a tracked asset (e.g. `^GSPC`, `GC=F`, `DX-Y.NYB`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like value.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the symbol is empty or whitespace-only.
    pub fn new(symbol: impl Into<String>) -> Result<Self, MareaError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(MareaError::invalid_arg("symbol must not be empty"));
        }
        Ok(Self(symbol))
    }

    /// Borrow the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = MareaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// One daily record of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading date, day granularity.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume, when the source reports one.
    pub volume: Option<u64>,
}

/// Ordered, deduplicated sequence of daily bars for one asset.
///
/// The constructor enforces the series invariant: strictly ascending by date
/// with no duplicate dates (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Normalize arbitrary bars into a valid series.
    ///
    /// Bars are keyed by date; the first appearance wins for duplicates and
    /// the result is sorted ascending by date.
    #[must_use]
    pub fn from_bars(bars: Vec<Bar>) -> Self {
        let mut map: BTreeMap<NaiveDate, Bar> = BTreeMap::new();
        for b in bars {
            map.entry(b.date).or_insert(b);
        }
        Self {
            bars: map.into_values().collect(),
        }
    }

    /// Borrow the bars in ascending date order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Consume the series, yielding its bars in ascending date order.
    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }

    /// Number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The maximum (latest) date present, `None` for an empty series.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}

/// Half-open day range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start date.
    pub start: NaiveDate,
    /// Exclusive end date.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range covering `[start, end)`.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the range covers no days (`start >= end`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Cadence requested from a remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// One record per calendar day.
    #[default]
    D1,
}

fn default_history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("hardcoded date is valid")
}

/// Configuration for the `Marea` synchronizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Symbols reconciled by batch runs, in run order.
    pub symbols: Vec<Symbol>,
    /// Inclusive start of the historical range used for first loads.
    pub history_start: NaiveDate,
    /// Cadence requested from the source.
    pub interval: Interval,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            history_start: default_history_start(),
            interval: Interval::default(),
        }
    }
}

/// Result of a single full or delta load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SyncOutcome {
    /// A fresh series was persisted by a full load.
    Loaded {
        /// Number of bars persisted.
        bars: usize,
    },
    /// New bars were appended by a delta load.
    Updated {
        /// Number of bars appended past the previous last date.
        appended: usize,
    },
    /// The source returned nothing for the requested range; no store entry
    /// was created.
    NoData,
    /// The stored series already extends through today; no fetch was made.
    UpToDate,
    /// The delta range produced nothing newer than the stored series.
    NoNewData,
    /// No local series exists for the symbol; run a full load first.
    NoStore,
}

/// Per-symbol outcome inside a [`SyncReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    /// The reconciled symbol.
    pub symbol: Symbol,
    /// What the run did for that symbol.
    pub outcome: SyncOutcome,
}

/// Aggregated result of a batch reconciliation run.
///
/// Partial failures land in `warnings` without aborting the batch; each
/// warning is wrapped with the symbol whose run produced it.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Per-symbol outcomes, in configured order.
    pub entries: Vec<SyncEntry>,
    /// Errors from symbols whose run failed.
    pub warnings: Vec<MareaError>,
}

impl SyncReport {
    /// Look up the outcome recorded for `symbol`, if its run succeeded.
    #[must_use]
    pub fn outcome_for(&self, symbol: &Symbol) -> Option<SyncOutcome> {
        self.entries
            .iter()
            .find(|e| &e.symbol == symbol)
            .map(|e| e.outcome)
    }
}
