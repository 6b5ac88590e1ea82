use super::*;

#[test]
fn format_date_handles_bare_dates() {
    assert_eq!(format_date("2026-01-05"), "January 5, 2026");
}

#[test]
fn format_date_handles_rfc3339_timestamps() {
    assert_eq!(format_date("2025-11-30T08:15:00Z"), "November 30, 2025");
    assert_eq!(format_date("2025-11-30T08:15:00+00:00"), "November 30, 2025");
}

#[test]
fn format_date_handles_naive_timestamps() {
    assert_eq!(format_date("2025-06-01T23:59:59.123456"), "June 1, 2025");
}

#[test]
fn format_date_time_renders_twelve_hour_clock() {
    assert_eq!(format_date_time("2026-01-05T14:13:00Z"), "Jan 5, 2026, 02:13 PM");
    assert_eq!(format_date_time("2026-01-05T00:05:00Z"), "Jan 5, 2026, 12:05 AM");
}

#[test]
fn unparseable_input_is_returned_verbatim() {
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_date_time(""), "");
}
