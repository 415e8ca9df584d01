//! Expiry decisions use calendar-day ages, not raw durations: a file written
//! at 23:59 is one day old two minutes later, matching the midnight rollover
//! boundary.

use chrono::{DateTime, Local, NaiveDate};
use std::fmt;
use std::time::SystemTime;

/// Returned when a dated filename carries a stamp that is not a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError(String);

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date stamp: '{}'", self.0)
    }
}

impl std::error::Error for DateParseError {}

/// Age in whole calendar days of a file's modification time, as of `today`.
#[must_use]
pub fn age_from_mtime(mtime: SystemTime, today: NaiveDate) -> i64 {
    let modified = DateTime::<Local>::from(mtime).date_naive();
    (today - modified).num_days()
}

/// Age in whole calendar days of an 8-digit `YYYYMMDD` stamp, as of `today`.
///
/// # Errors
/// Fails when the stamp does not name a real calendar date.
pub fn age_from_stamp(stamp: &str, today: NaiveDate) -> Result<i64, DateParseError> {
    let date = NaiveDate::parse_from_str(stamp, "%Y%m%d")
        .map_err(|_| DateParseError(stamp.to_string()))?;
    Ok((today - date).num_days())
}

/// Strictly greater: a file exactly at the threshold is kept. Negative ages
/// (future dates) are never expired.
#[must_use]
pub fn is_expired(age_days: i64, max_age_days: u32) -> bool {
    age_days > i64::from(max_age_days)
}
