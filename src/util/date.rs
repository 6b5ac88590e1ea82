//! Display formatting for backend ISO-8601 timestamps and dates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend emits RFC 3339 datetimes (`created_at`, `date_joined`) and
//! bare `YYYY-MM-DD` dates (history day buckets). Formatting never fails:
//! unparseable input is returned verbatim so a schema drift degrades to raw
//! text instead of a blank cell.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Long date, e.g. `January 5, 2026`.
pub fn format_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => iso.to_owned(),
    }
}

/// Short date with time, e.g. `Jan 5, 2026, 02:13 PM`.
pub fn format_date_time(iso: &str) -> String {
    match parse_date_time(iso) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => iso.to_owned(),
    }
}

fn parse_date(iso: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return Some(date);
    }
    parse_date_time(iso).map(|dt| dt.date())
}

fn parse_date_time(iso: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.naive_local());
    }
    // Django omits the offset when timezone support is off.
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
