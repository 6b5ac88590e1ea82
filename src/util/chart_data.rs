//! Chart data shaping for the mood history view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend returns per-day buckets; these helpers flatten them into the
//! three series the charts render (day-average line, five-bucket counts, and
//! the cycling accent palette). Rendering itself lives in
//! `components::charts`.

#[cfg(test)]
#[path = "chart_data_test.rs"]
mod chart_data_test;

use crate::net::types::MoodHistoryDay;

/// One point on the day-average line, in backend day order.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    /// Bare `YYYY-MM-DD` date label.
    pub date: String,
    /// Mean mood level for the day, `1.0..=5.0`.
    pub average: f64,
}

/// Day-average series for the line chart, preserving backend order.
pub fn average_mood_series(days: &[MoodHistoryDay]) -> Vec<LinePoint> {
    days.iter()
        .map(|day| LinePoint { date: day.date.clone(), average: day.average_mood })
        .collect()
}

/// Count of entries at each level `1..=5` across all day buckets, indexed by
/// `level - 1`. Out-of-range levels are ignored rather than miscounted.
pub fn mood_level_counts(days: &[MoodHistoryDay]) -> [u32; 5] {
    let mut counts = [0u32; 5];
    for entry in days.iter().flat_map(|day| &day.mood_entries) {
        if (1..=5).contains(&entry.mood_level) {
            counts[usize::from(entry.mood_level) - 1] += 1;
        }
    }
    counts
}

/// Accent palette for generated chart series, cycled to `count` entries.
pub fn chart_colors(count: usize) -> Vec<&'static str> {
    const PALETTE: [&str; 10] = [
        "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe", "#43e97b", "#38f9d7",
        "#ffecd2", "#fcb69f",
    ];
    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}
