use chrono::Days;
use tracing::{debug, info, warn};

use marea_core::{
    DateRange, MareaError, Series, Symbol, SyncEntry, SyncOutcome, SyncReport,
    merge_bars_by_priority, strictly_after,
};

use crate::Marea;

impl Marea {
    /// Replace the local series for `symbol` with everything the source has
    /// inside `range`.
    ///
    /// Behavior:
    /// - A source failure or an empty response yields [`SyncOutcome::NoData`]
    ///   and leaves the store untouched.
    /// - Otherwise the fetched bars are normalized (sorted, deduplicated) and
    ///   persisted, overwriting any previous series for the symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty range; store failures propagate.
    pub async fn full_load(
        &self,
        symbol: &Symbol,
        range: DateRange,
    ) -> Result<SyncOutcome, MareaError> {
        if range.is_empty() {
            return Err(MareaError::invalid_arg(format!(
                "empty range {range} for full load of '{symbol}'"
            )));
        }

        let bars = match self.source.fetch(symbol, range, self.cfg.interval).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "full load fetch failed");
                return Ok(SyncOutcome::NoData);
            }
        };
        if bars.is_empty() {
            debug!(symbol = %symbol, %range, "source returned no bars");
            return Ok(SyncOutcome::NoData);
        }

        let series = Series::from_bars(bars);
        self.store.write(symbol, &series).await?;
        info!(symbol = %symbol, bars = series.len(), "full load persisted");
        Ok(SyncOutcome::Loaded { bars: series.len() })
    }

    /// Fetch only the days past the stored series' last date and append the
    /// strictly newer bars.
    ///
    /// Behavior:
    /// - The delta range is half-open `[last_date + 1, today)`, so the bar for
    ///   a still-open trading day is never requested or persisted.
    /// - Fetched bars are filtered to dates strictly after the stored last
    ///   date before merging. Sources that treat the range start inclusively
    ///   cannot reintroduce a day the series already holds, and rerunning a
    ///   delta is a no-op.
    /// - A source failure yields [`SyncOutcome::NoNewData`] and leaves the
    ///   store untouched.
    ///
    /// # Errors
    /// Store failures propagate, both on the initial read and the final write.
    pub async fn delta_load(&self, symbol: &Symbol) -> Result<SyncOutcome, MareaError> {
        let Some(existing) = self.store.read(symbol).await? else {
            return Ok(SyncOutcome::NoStore);
        };
        let Some(last_date) = existing.last_date() else {
            return Ok(SyncOutcome::NoStore);
        };

        let Some(start) = last_date.checked_add_days(Days::new(1)) else {
            return Err(MareaError::Data(format!(
                "cannot advance past stored last date {last_date} for '{symbol}'"
            )));
        };
        let range = DateRange::new(start, self.clock.today());
        if range.is_empty() {
            debug!(symbol = %symbol, %last_date, "series already current");
            return Ok(SyncOutcome::UpToDate);
        }

        let fetched = match self.source.fetch(symbol, range, self.cfg.interval).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "delta fetch failed");
                return Ok(SyncOutcome::NoNewData);
            }
        };

        let fresh = strictly_after(fetched, last_date);
        if fresh.is_empty() {
            debug!(symbol = %symbol, %range, "no bars newer than stored series");
            return Ok(SyncOutcome::NoNewData);
        }

        let existing_len = existing.len();
        let merged = Series::from_bars(merge_bars_by_priority([existing.into_bars(), fresh]));
        let appended = merged.len() - existing_len;
        self.store.write(symbol, &merged).await?;
        info!(symbol = %symbol, appended, "delta load persisted");
        Ok(SyncOutcome::Updated { appended })
    }

    /// Reconcile every configured symbol in one pass.
    ///
    /// Behavior:
    /// - Symbols with no local series (or an empty one) get a full load over
    ///   `[history_start, today)`; the rest get a delta load.
    /// - Symbols are processed sequentially in configured order, so one slow
    ///   or failing symbol never starves the log of a clear per-symbol trail.
    /// - Partial failures are wrapped with their symbol and collected into the
    ///   report's `warnings` without aborting the batch.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no symbols are configured.
    pub async fn sync_all(&self) -> Result<SyncReport, MareaError> {
        if self.cfg.symbols.is_empty() {
            return Err(MareaError::invalid_arg(
                "no symbols configured; add them via symbols(...)",
            ));
        }

        let mut report = SyncReport::default();
        for symbol in &self.cfg.symbols {
            let result = match self.store.read(symbol).await {
                Ok(Some(series)) if !series.is_empty() => self.delta_load(symbol).await,
                Ok(_) => {
                    let range = DateRange::new(self.cfg.history_start, self.clock.today());
                    self.full_load(symbol, range).await
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(outcome) => report.entries.push(SyncEntry {
                    symbol: symbol.clone(),
                    outcome,
                }),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "symbol reconciliation failed");
                    report
                        .warnings
                        .push(MareaError::for_symbol(symbol.to_string(), e));
                }
            }
        }
        Ok(report)
    }
}
