//! Text encodings for timestamps and calendar dates
//!
//! Timestamps are RFC 3339 in UTC with millisecond precision
//! (`2026-10-18T09:30:00.000Z`); dates are `YYYY-MM-DD`. Parsing also accepts
//! SQLite's `CURRENT_TIMESTAMP` layout (`2026-10-18 09:30:00`) and, for dates,
//! a full timestamp whose date part is used.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::errors::{DoItNowError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// # Errors
///
/// Returns `InvalidTimestamp` when the value matches neither accepted layout.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, SQLITE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| DoItNowError::InvalidTimestamp {
            value: value.to_string(),
        })
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// # Errors
///
/// Returns `InvalidDate` when the value is neither a date nor a timestamp.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    parse_timestamp(trimmed)
        .map(|ts| ts.date_naive())
        .map_err(|_| DoItNowError::InvalidDate {
            value: value.to_string(),
        })
}
