use chrono::{DateTime, Utc};

/// Port for reading the wall clock used to stamp log lines.
pub trait ClockPort: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
