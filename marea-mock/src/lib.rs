//! Deterministic test doubles for the marea synchronizer.
//!
//! Provides an in-memory [`MockSource`] whose per-symbol behavior can be
//! scripted from the outside, an in-memory [`MemoryStore`], and a
//! [`FixedClock`] that lets tests pin and advance "today" without touching
//! wall-clock time. Everything here is CI-safe: no network, no filesystem.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use tokio::sync::Mutex;

use marea_core::{
    Bar, Clock, DateRange, Interval, MareaError, Series, SeriesSource, SeriesStore, Symbol,
};

mod fixtures;

pub use fixtures::daily_bars;

/// Instruction for how [`MockSource::fetch`] should behave for a symbol.
#[derive(Clone)]
pub enum SourceBehavior {
    /// Serve the bars registered via [`MockSource::set_bars`], clipped to the
    /// requested range.
    Canonical,
    /// Return an empty result, as a provider does for unknown tickers.
    Empty,
    /// Fail with a source error carrying the given message.
    Fail(String),
}

#[derive(Default)]
struct SourceState {
    series: HashMap<Symbol, Vec<Bar>>,
    behaviors: HashMap<Symbol, SourceBehavior>,
    calls: Vec<(Symbol, DateRange)>,
}

/// Scriptable in-memory [`SeriesSource`].
///
/// By default every symbol behaves as [`SourceBehavior::Canonical`] over the
/// bars registered for it. The source logs each `fetch` call so tests can
/// assert on the exact ranges the synchronizer requested.
#[derive(Clone, Default)]
pub struct MockSource {
    state: Arc<Mutex<SourceState>>,
    boundary_inclusive: bool,
}

impl MockSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that also returns the bar dated one day before the requested
    /// start, mimicking providers that treat the range start inclusively or
    /// resolve it in a different session's timezone.
    #[must_use]
    pub fn boundary_inclusive() -> Self {
        Self {
            state: Arc::default(),
            boundary_inclusive: true,
        }
    }

    /// Register the canonical bars served for `symbol`.
    pub async fn set_bars(&self, symbol: Symbol, bars: Vec<Bar>) {
        let mut guard = self.state.lock().await;
        guard.series.insert(symbol, bars);
    }

    /// Override the behavior for `symbol`.
    pub async fn set_behavior(&self, symbol: Symbol, behavior: SourceBehavior) {
        let mut guard = self.state.lock().await;
        guard.behaviors.insert(symbol, behavior);
    }

    /// Ranges requested so far, in call order.
    pub async fn calls(&self) -> Vec<(Symbol, DateRange)> {
        self.state.lock().await.calls.clone()
    }
}

#[async_trait]
impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "marea-mock"
    }

    async fn fetch(
        &self,
        symbol: &Symbol,
        range: DateRange,
        _interval: Interval,
    ) -> Result<Vec<Bar>, MareaError> {
        let mut guard = self.state.lock().await;
        guard.calls.push((symbol.clone(), range));
        match guard.behaviors.get(symbol).cloned().unwrap_or(SourceBehavior::Canonical) {
            SourceBehavior::Canonical => {
                let effective_start = if self.boundary_inclusive {
                    range.start.checked_sub_days(Days::new(1)).unwrap_or(range.start)
                } else {
                    range.start
                };
                let bars = guard
                    .series
                    .get(symbol)
                    .map(|bars| {
                        bars.iter()
                            .filter(|b| b.date >= effective_start && b.date < range.end)
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                Ok(bars)
            }
            SourceBehavior::Empty => Ok(Vec::new()),
            SourceBehavior::Fail(msg) => Err(MareaError::source(self.name(), msg)),
        }
    }
}

#[derive(Default)]
struct StoreState {
    map: HashMap<Symbol, Series>,
    fail_writes: bool,
}

/// In-memory [`SeriesStore`] with inspectable contents.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing series, as if a prior run wrote it.
    pub async fn seed(&self, symbol: Symbol, series: Series) {
        let mut guard = self.state.lock().await;
        guard.map.insert(symbol, series);
    }

    /// Make every subsequent `write` fail with a store error.
    pub async fn set_fail_writes(&self, fail: bool) {
        let mut guard = self.state.lock().await;
        guard.fail_writes = fail;
    }

    /// A copy of the stored series for `symbol`, if any.
    pub async fn snapshot(&self, symbol: &Symbol) -> Option<Series> {
        self.state.lock().await.map.get(symbol).cloned()
    }
}

#[async_trait]
impl SeriesStore for MemoryStore {
    async fn read(&self, symbol: &Symbol) -> Result<Option<Series>, MareaError> {
        Ok(self.state.lock().await.map.get(symbol).cloned())
    }

    async fn write(&self, symbol: &Symbol, series: &Series) -> Result<(), MareaError> {
        let mut guard = self.state.lock().await;
        if guard.fail_writes {
            return Err(MareaError::store("forced write failure"));
        }
        guard.map.insert(symbol.clone(), series.clone());
        Ok(())
    }
}

/// A [`Clock`] pinned to a test-controlled date.
pub struct FixedClock {
    today: std::sync::RwLock<NaiveDate>,
}

impl FixedClock {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: std::sync::RwLock::new(today),
        }
    }

    /// Move the clock to a specific date.
    pub fn set_today(&self, today: NaiveDate) {
        *self.today.write().unwrap() = today;
    }

    /// Advance the clock by `days`.
    pub fn advance_days(&self, days: u64) {
        let mut guard = self.today.write().unwrap();
        if let Some(next) = guard.checked_add_days(Days::new(days)) {
            *guard = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap()
    }
}
