use async_trait::async_trait;

use crate::MareaError;
use crate::types::{Bar, DateRange, Interval, Series, Symbol};

/// Focused role trait for remote sources that provide daily series data.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// A stable identifier used to tag errors and log records
    /// (e.g. "marea-mock", "marea-yahoo").
    fn name(&self) -> &'static str;

    /// Fetch the canonical sub-series for `symbol` falling inside `range`.
    ///
    /// `range` is half-open `[start, end)` at day granularity. An empty
    /// result means "nothing in range" and is not an error; callers must not
    /// assume the result respects the boundary exactly (some sources are
    /// inclusive of the start date or return coarser granularity overlapping
    /// it).
    async fn fetch(
        &self,
        symbol: &Symbol,
        range: DateRange,
        interval: Interval,
    ) -> Result<Vec<Bar>, MareaError>;
}

/// Focused role trait for persisted per-symbol series storage.
///
/// The synchronizer composes `read` + merge + `write` to implement append;
/// stores only ever see full overwrites.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Read the persisted series for `symbol`; `None` if absent (first run).
    async fn read(&self, symbol: &Symbol) -> Result<Option<Series>, MareaError>;

    /// Persist `series` for `symbol`, overwriting any existing entry.
    async fn write(&self, symbol: &Symbol, series: &Series) -> Result<(), MareaError>;
}
