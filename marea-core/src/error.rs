use thiserror::Error;

/// Unified error type for the marea workspace.
///
/// This wraps argument validation errors, data-shape issues, collaborator
/// failures (remote source or local store), and a per-symbol envelope used
/// when aggregating batch runs.
#[derive(Debug, Error)]
pub enum MareaError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or persisted data (out-of-range dates,
    /// malformed rows, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// The remote source reported a failure.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed (e.g. "marea-mock").
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The local store reported a failure.
    #[error("store failed: {msg}")]
    Store {
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series for GOLD".
        what: String,
    },

    /// A per-symbol reconciliation inside a batch run failed.
    #[error("{symbol}: {source}")]
    Symbol {
        /// Symbol whose run failed.
        symbol: String,
        /// The underlying failure.
        #[source]
        source: Box<MareaError>,
    },
}

impl MareaError {
    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Store` error from any message.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store { msg: msg.into() }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: wrap an error with the symbol whose run produced it.
    pub fn for_symbol(symbol: impl Into<String>, source: Self) -> Self {
        Self::Symbol {
            symbol: symbol.into(),
            source: Box::new(source),
        }
    }
}
