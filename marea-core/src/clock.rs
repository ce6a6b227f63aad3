use chrono::{NaiveDate, Utc};

/// Capability providing "current date".
///
/// The synchronizer never reads the system clock directly; injecting this
/// seam keeps the delta boundary logic deterministic and testable without
/// waiting for real time to pass.
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation reading the UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
