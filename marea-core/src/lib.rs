//! marea-core
//!
//! Core types, traits, and utilities shared across the marea ecosystem.
//!
//! - `types`: common data structures (symbols, bars, series, ranges, config).
//! - `connector`: the `SeriesSource` and `SeriesStore` role traits that the
//!   synchronizer composes.
//! - `clock`: the injected current-date capability, so boundary logic stays
//!   deterministic under test.
//! - `timeseries`: helpers to merge daily series while preserving the
//!   sorted-and-deduplicated invariant.
#![warn(missing_docs)]

/// Injected current-date capability and the wall-clock implementation.
pub mod clock;
/// Remote-source and local-store role traits.
pub mod connector;
/// Unified error type for the marea workspace.
pub mod error;
/// Time-series utilities for merging and boundary filtering.
pub mod timeseries;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use connector::{SeriesSource, SeriesStore};
pub use error::MareaError;
pub use timeseries::merge::{merge_bars_by_priority, strictly_after};
pub use types::*;
