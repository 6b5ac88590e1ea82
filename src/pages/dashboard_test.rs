use super::*;

// =============================================================
// Greeting
// =============================================================

#[test]
fn greeting_by_hour_of_day() {
    assert_eq!(greeting(0), "Good morning");
    assert_eq!(greeting(11), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(17), "Good afternoon");
    assert_eq!(greeting(18), "Good evening");
    assert_eq!(greeting(23), "Good evening");
}

// =============================================================
// Stat rendering
// =============================================================

#[test]
fn average_mood_text_formats_one_decimal() {
    assert_eq!(average_mood_text(Some(3.6666)), "3.7");
    assert_eq!(average_mood_text(Some(4.0)), "4.0");
}

#[test]
fn average_mood_text_handles_missing_average() {
    assert_eq!(average_mood_text(None), "N/A");
}

// =============================================================
// Excerpts
// =============================================================

#[test]
fn excerpt_passes_short_content_through() {
    assert_eq!(excerpt("short note", 100), "short note");
}

#[test]
fn excerpt_truncates_with_ellipsis() {
    assert_eq!(excerpt("abcdef", 3), "abc...");
}

#[test]
fn excerpt_counts_characters_not_bytes() {
    assert_eq!(excerpt("ééé", 3), "ééé");
    assert_eq!(excerpt("éééé", 3), "ééé...");
}
