//! The fixed five-level mood scale.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mood entry carries a level in `1..=5`; pages and charts render the
//! level through this table so label, emoji, and color stay consistent.

#[cfg(test)]
#[path = "mood_test.rs"]
mod mood_test;

/// One selectable mood level with its display attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodOption {
    /// Scale position, `1` (worst) through `5` (best).
    pub level: u8,
    /// Short display label.
    pub label: &'static str,
    /// Emoji shown next to the label.
    pub emoji: &'static str,
    /// Accent color (hex) for badges and chart segments.
    pub color: &'static str,
}

/// The scale, ordered worst to best.
pub static MOOD_SCALE: [MoodOption; 5] = [
    MoodOption { level: 1, label: "Very Sad", emoji: "😢", color: "#e74c3c" },
    MoodOption { level: 2, label: "Sad", emoji: "😞", color: "#f39c12" },
    MoodOption { level: 3, label: "Neutral", emoji: "😐", color: "#95a5a6" },
    MoodOption { level: 4, label: "Happy", emoji: "😊", color: "#2ecc71" },
    MoodOption { level: 5, label: "Very Happy", emoji: "😄", color: "#27ae60" },
];

/// Look up a level's display attributes. Out-of-range levels fall back to
/// Neutral so a malformed backend value still renders.
pub fn mood_option(level: u8) -> &'static MoodOption {
    MOOD_SCALE
        .iter()
        .find(|m| m.level == level)
        .unwrap_or(&MOOD_SCALE[2])
}

pub fn mood_label(level: u8) -> &'static str {
    mood_option(level).label
}

pub fn mood_emoji(level: u8) -> &'static str {
    mood_option(level).emoji
}

pub fn mood_color(level: u8) -> &'static str {
    mood_option(level).color
}

/// Emoji for a fractional day-average, bucketed at half-level boundaries.
pub fn average_mood_emoji(average: f64) -> &'static str {
    if average >= 4.5 {
        mood_emoji(5)
    } else if average >= 3.5 {
        mood_emoji(4)
    } else if average >= 2.5 {
        mood_emoji(3)
    } else if average >= 1.5 {
        mood_emoji(2)
    } else {
        mood_emoji(1)
    }
}
