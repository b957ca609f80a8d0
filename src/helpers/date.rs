//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveTime};
use std::fmt::Write;

/// Parse a content date (`YYYY-MM-DD` or a full RFC 3339 timestamp)
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.date_naive()))
}

/// Format a date using a Moment.js-compatible format string
///
/// Formats that need a timezone fall back to ISO `YYYY-MM-DD`.
///
/// # Examples
/// ```ignore
/// format_date(&date, "DD.MM.YYYY") // -> "20.03.2019"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    let datetime = date.and_time(NaiveTime::MIN);

    let mut out = String::new();
    if write!(out, "{}", datetime.format(&chrono_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each unit
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
