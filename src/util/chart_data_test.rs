use super::*;
use crate::net::types::MoodEntry;

fn entry(id: &str, level: u8) -> MoodEntry {
    MoodEntry {
        id: id.to_owned(),
        mood_level: level,
        notes: None,
        created_at: "2025-01-01T09:00:00Z".to_owned(),
    }
}

fn day(date: &str, average: f64, levels: &[u8]) -> MoodHistoryDay {
    MoodHistoryDay {
        date: date.to_owned(),
        average_mood: average,
        mood_entries: levels
            .iter()
            .enumerate()
            .map(|(i, &level)| entry(&format!("{date}-{i}"), level))
            .collect(),
    }
}

// =============================================================
// Line series
// =============================================================

#[test]
fn average_mood_series_preserves_day_order() {
    let days = [day("2025-01-01", 3.0, &[3]), day("2025-01-02", 4.5, &[4, 5])];
    let series = average_mood_series(&days);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, "2025-01-01");
    assert_eq!(series[1].average, 4.5);
}

#[test]
fn average_mood_series_empty_for_no_days() {
    assert!(average_mood_series(&[]).is_empty());
}

// =============================================================
// Level buckets
// =============================================================

#[test]
fn mood_level_counts_buckets_across_days() {
    let days = [
        day("2025-01-01", 3.0, &[1, 3, 3]),
        day("2025-01-02", 4.0, &[4, 5, 3]),
    ];
    assert_eq!(mood_level_counts(&days), [1, 0, 3, 1, 1]);
}

#[test]
fn mood_level_counts_ignores_out_of_range_levels() {
    let days = [day("2025-01-01", 3.0, &[0, 6, 2])];
    assert_eq!(mood_level_counts(&days), [0, 1, 0, 0, 0]);
}

// =============================================================
// Palette
// =============================================================

#[test]
fn chart_colors_cycles_past_palette_length() {
    let colors = chart_colors(12);
    assert_eq!(colors.len(), 12);
    assert_eq!(colors[0], colors[10]);
    assert_eq!(colors[1], colors[11]);
}
