//! Date helper functions

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

/// Text shown for a date that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a date string in long form (like "March 5, 2024")
///
/// The calendar date is taken as written; no timezone shift is applied.
/// Unparseable input yields [`INVALID_DATE`].
pub fn long_date(date: &str) -> String {
    match parse_date_string(date) {
        Some(d) => full_date(&d),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a calendar date in full format
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Current year in local time, for the footer
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // RFC 3339 / ISO 8601 with offset: keep the date as written
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
