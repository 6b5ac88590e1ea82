use super::*;

// =============================================================
// Scale lookups
// =============================================================

#[test]
fn mood_option_resolves_each_level() {
    for level in 1..=5u8 {
        assert_eq!(mood_option(level).level, level);
    }
}

#[test]
fn mood_option_falls_back_to_neutral() {
    assert_eq!(mood_option(0).label, "Neutral");
    assert_eq!(mood_option(9).label, "Neutral");
}

#[test]
fn mood_label_and_color_match_scale_ends() {
    assert_eq!(mood_label(1), "Very Sad");
    assert_eq!(mood_color(1), "#e74c3c");
    assert_eq!(mood_label(5), "Very Happy");
    assert_eq!(mood_color(5), "#27ae60");
}

// =============================================================
// Average bucketing
// =============================================================

#[test]
fn average_mood_emoji_buckets_at_half_levels() {
    assert_eq!(average_mood_emoji(4.5), mood_emoji(5));
    assert_eq!(average_mood_emoji(4.49), mood_emoji(4));
    assert_eq!(average_mood_emoji(2.5), mood_emoji(3));
    assert_eq!(average_mood_emoji(1.5), mood_emoji(2));
    assert_eq!(average_mood_emoji(1.0), mood_emoji(1));
}
