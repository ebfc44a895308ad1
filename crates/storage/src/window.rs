//! Rolling Window
//!
//! The "last twelve months" of the dataset are anchored on its latest
//! recorded date, not on the wall clock.

use crate::StorageError;
use chrono::{Duration, NaiveDate};

/// Date format used by the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 52 weeks and 1 day: a fixed 365-day offset, not a calendar year
pub fn window_length() -> Duration {
    Duration::weeks(52) + Duration::days(1)
}

/// First date inside the rolling window ending at `max_date`
pub fn window_start(max_date: &str) -> Result<NaiveDate, StorageError> {
    let latest = NaiveDate::parse_from_str(max_date, DATE_FORMAT)
        .map_err(|e| StorageError::InvalidDate(format!("{}: {}", max_date, e)))?;

    latest
        .checked_sub_signed(window_length())
        .ok_or_else(|| StorageError::InvalidDate(format!("{}: window underflow", max_date)))
}

/// Format a date the way the `date` column stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
