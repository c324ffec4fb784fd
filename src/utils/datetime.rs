//! Date utility functions
//!
//! The backend exchanges calendar dates as `YYYY-MM-DD` and timestamps as
//! RFC 3339. Display goes through a configurable chrono format string.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Wire format for calendar dates, also the default display format
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), API_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(API_DATE_FORMAT).to_string()
}

/// Format a calendar date for display
pub fn format_date(d: NaiveDate, display_format: &str) -> String {
    d.format(display_format).to_string()
}

/// Format the local calendar date of a timestamp for display
pub fn format_timestamp_date(ts: &DateTime<Utc>, display_format: &str) -> String {
    ts.with_timezone(&Local).date_naive().format(display_format).to_string()
}

/// Check that a chrono format string renders without error
pub fn is_valid_format(display_format: &str) -> bool {
    use std::fmt::Write;

    let sample = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    let mut out = String::new();
    write!(out, "{}", sample.format(display_format)).is_ok()
}
