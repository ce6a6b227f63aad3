//! Time-series utilities shared by stores and the synchronizer.
//!
//! Modules include:
//! - `merge`: merge multiple daily series respecting priority, plus the
//!   strict boundary filter used by delta loads.
/// Merge utilities for joining daily series.
pub mod merge;
