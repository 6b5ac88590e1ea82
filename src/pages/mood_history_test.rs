use super::*;
use crate::net::types::MoodEntry;

fn entry(id: &str, level: u8, notes: Option<&str>) -> MoodEntry {
    MoodEntry {
        id: id.to_owned(),
        mood_level: level,
        notes: notes.map(ToOwned::to_owned),
        created_at: "2025-01-01T09:00:00Z".to_owned(),
    }
}

// =============================================================
// ChartKind
// =============================================================

#[test]
fn chart_kind_values_round_trip() {
    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Doughnut] {
        assert_eq!(ChartKind::from_value(kind.value()), kind);
    }
}

#[test]
fn chart_kind_defaults_to_line_on_unknown_values() {
    assert_eq!(ChartKind::from_value("pie"), ChartKind::Line);
    assert_eq!(ChartKind::from_value(""), ChartKind::Line);
}

#[test]
fn history_prefs_serialize_compactly() {
    let prefs = HistoryPrefs { days: 90, chart: ChartKind::Doughnut };
    let json = serde_json::to_value(prefs).unwrap();
    assert_eq!(json, serde_json::json!({"days": 90, "chart": "doughnut"}));
}

// =============================================================
// Table shaping
// =============================================================

#[test]
fn recent_entry_rows_flattens_at_most_ten_days() {
    let days: Vec<MoodHistoryDay> = (0..12)
        .map(|i| MoodHistoryDay {
            date: format!("2025-01-{:02}", i + 1),
            average_mood: 3.0,
            mood_entries: vec![entry(&format!("m{i}"), 3, None)],
        })
        .collect();
    let rows = recent_entry_rows(&days);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].id, "m0");
    assert_eq!(rows[9].id, "m9");
}

#[test]
fn notes_cell_trims_and_truncates() {
    assert_eq!(notes_cell(None), None);
    assert_eq!(notes_cell(Some("   ")), None);
    assert_eq!(notes_cell(Some(" fine day ")), Some("fine day".to_owned()));

    let long = "x".repeat(60);
    let cell = notes_cell(Some(&long)).unwrap();
    assert_eq!(cell.chars().count(), 53);
    assert!(cell.ends_with("..."));
}
