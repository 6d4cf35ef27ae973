use chrono::{DateTime, NaiveDate, Utc};

/// Port for time abstraction
///
/// Session tables are computed for "today"; this lets the server use
/// the system time while tests pin a fixed instant.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
