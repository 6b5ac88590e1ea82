use super::*;

// =============================================================
// Polyline geometry
// =============================================================

#[test]
fn polyline_points_empty_series_is_empty() {
    assert_eq!(polyline_points(&[], 640.0, 240.0), "");
}

#[test]
fn polyline_points_centers_a_single_point() {
    assert_eq!(polyline_points(&[3.0], 640.0, 240.0), "320.0,120.0");
}

#[test]
fn polyline_points_spans_the_padded_width() {
    let points = polyline_points(&[1.0, 5.0], 640.0, 240.0);
    // Level 1 sits on the bottom edge of the plot area, level 5 on the top.
    assert_eq!(points, "16.0,224.0 624.0,16.0");
}

#[test]
fn polyline_points_clamps_out_of_scale_averages() {
    let points = polyline_points(&[0.0, 9.0], 640.0, 240.0);
    assert_eq!(points, "16.0,224.0 624.0,16.0");
}

// =============================================================
// Donut segments
// =============================================================

#[test]
fn donut_segments_empty_without_counts() {
    assert!(donut_segments(&[0, 0, 0, 0, 0]).is_empty());
}

#[test]
fn donut_segments_skip_empty_buckets_and_cover_the_whole() {
    let segments = donut_segments(&[1, 0, 1, 0, 2]);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].0, 1);
    assert_eq!(segments[1].0, 3);
    assert_eq!(segments[2].0, 5);

    assert!((segments[0].1 - 0.0).abs() < 1e-9);
    assert!((segments[2].2 - 1.0).abs() < 1e-9);
    // Adjacent segments share boundaries.
    assert!((segments[0].2 - segments[1].1).abs() < 1e-9);
    assert!((segments[1].2 - segments[2].1).abs() < 1e-9);
}

// =============================================================
// Arc paths
// =============================================================

#[test]
fn arc_path_uses_large_arc_flag_past_half_turn() {
    let minor = arc_path(100.0, 100.0, 80.0, 0.0, 0.25);
    let major = arc_path(100.0, 100.0, 80.0, 0.0, 0.75);
    assert!(minor.contains(" 0 0 1 "));
    assert!(major.contains(" 0 1 1 "));
}

#[test]
fn arc_path_starts_at_twelve_o_clock() {
    let path = arc_path(100.0, 100.0, 80.0, 0.0, 0.25);
    assert!(path.starts_with("M 100.0 20.0 "));
}
