use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Date format accepted by commands.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time-of-day format accepted by commands.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a Discord id from a String
///
/// Discord ids are never zero, so `"0"` is rejected like any other malformed id.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result.get())
}

/// Builds a UTC timestamp from separate day and time-of-day arguments.
///
/// Every command goes through this function, so the same input always yields the
/// same timestamp and exact-match lookups by date stay consistent.
///
/// # Arguments
/// - `day` - Date formatted as `YYYY-MM-DD`
/// - `time` - Time of day formatted as `HH:MM` (24 hour)
///
/// # Returns
/// - `Some(DateTime<Utc>)` - The combined timestamp, seconds set to zero
/// - `None` - Either part is malformed
pub fn parse_session_date(day: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(day, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;

    Some(date.and_time(time).and_utc())
}
