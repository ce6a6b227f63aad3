use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use marea_core::{Clock, MareaError, SeriesSource, SeriesStore, Symbol, SyncConfig, SystemClock};

/// Synchronizer binding one source, one store, and a clock.
pub struct Marea {
    pub(crate) source: Arc<dyn SeriesSource>,
    pub(crate) store: Arc<dyn SeriesStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) cfg: SyncConfig,
}

impl std::fmt::Debug for Marea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Marea")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

impl Marea {
    /// Begin building a synchronizer.
    #[must_use]
    pub fn builder() -> MareaBuilder {
        MareaBuilder::new()
    }
}

/// Builder for constructing a [`Marea`] synchronizer.
pub struct MareaBuilder {
    source: Option<Arc<dyn SeriesSource>>,
    store: Option<Arc<dyn SeriesStore>>,
    clock: Arc<dyn Clock>,
    cfg: SyncConfig,
}

impl Default for MareaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MareaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior:
    /// - Starts without a source or store; both must be registered before
    ///   [`build`](Self::build) succeeds.
    /// - The clock defaults to the system UTC date; tests swap in a fixed one.
    /// - The history start defaults to 2000-01-01 and the interval to daily.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            store: None,
            clock: Arc::new(SystemClock),
            cfg: SyncConfig::default(),
        }
    }

    /// Register the remote source bars are fetched from.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Register the local store series are persisted to.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SeriesStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the clock that defines "today".
    ///
    /// The default system clock is right for production; a pinned clock makes
    /// delta ranges deterministic in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the list of symbols reconciled by [`Marea::sync_all`].
    #[must_use]
    pub fn symbols(mut self, symbols: Vec<Symbol>) -> Self {
        self.cfg.symbols = symbols;
        self
    }

    /// Set the inclusive start date used when a symbol has no local series.
    #[must_use]
    pub const fn history_start(mut self, start: NaiveDate) -> Self {
        self.cfg.history_start = start;
        self
    }

    /// Build the [`Marea`] synchronizer.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source or store was registered, or if the
    /// configured symbol list contains duplicates.
    pub fn build(self) -> Result<Marea, MareaError> {
        let source = self.source.ok_or_else(|| {
            MareaError::invalid_arg("no source registered; add one via with_source(...)")
        })?;
        let store = self.store.ok_or_else(|| {
            MareaError::invalid_arg("no store registered; add one via with_store(...)")
        })?;

        let mut seen = HashSet::new();
        for symbol in &self.cfg.symbols {
            if !seen.insert(symbol.clone()) {
                return Err(MareaError::invalid_arg(format!(
                    "duplicate symbol '{symbol}' in configured symbols"
                )));
            }
        }

        Ok(Marea {
            source,
            store,
            clock: self.clock,
            cfg: self.cfg,
        })
    }
}
