//! Marea keeps local daily market series aligned with a remote source.
//!
//! Overview
//! - A [`Marea`] instance wires one [`SeriesSource`] (where bars come from),
//!   one [`SeriesStore`] (where they are persisted), and a [`Clock`] that
//!   defines "today".
//! - [`Marea::full_load`] replaces a symbol's local series with everything the
//!   source has for a date range.
//! - [`Marea::delta_load`] fetches only the days past the stored series' last
//!   date and appends the strictly newer bars.
//! - [`Marea::sync_all`] reconciles every configured symbol in one pass,
//!   picking full or delta per symbol and collecting partial failures as
//!   warnings instead of aborting the batch.
//!
//! Key behaviors
//! - Delta ranges are half-open `[last_date + 1, today)`, so the bar for a
//!   still-open trading day is never persisted.
//! - Freshly fetched bars are filtered to dates strictly after the stored
//!   last date before merging, which keeps delta runs idempotent even against
//!   sources that treat the range start inclusively.
//! - Source failures degrade to `NoData`/`NoNewData` outcomes; store failures
//!   propagate, since a store that cannot persist makes the run meaningless.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use marea::{Marea, Symbol};
//!
//! let marea = Marea::builder()
//!     .with_source(Arc::new(source))
//!     .with_store(Arc::new(store))
//!     .symbols(vec![Symbol::new("GC=F")?, Symbol::new("^GSPC")?])
//!     .build()?;
//!
//! let report = marea.sync_all().await?;
//! for entry in &report.entries {
//!     println!("{}: {:?}", entry.symbol, entry.outcome);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod sync;

pub use crate::core::{Marea, MareaBuilder};
pub use marea_core::{
    Bar, Clock, DateRange, Interval, MareaError, Series, SeriesSource, SeriesStore, Symbol,
    SyncConfig, SyncEntry, SyncOutcome, SyncReport, SystemClock,
};
