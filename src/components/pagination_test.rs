use super::*;

// =============================================================
// Page count
// =============================================================

#[test]
fn page_count_divides_with_ceiling() {
    assert_eq!(page_count(0, 6), 0);
    assert_eq!(page_count(1, 6), 1);
    assert_eq!(page_count(6, 6), 1);
    assert_eq!(page_count(7, 6), 2);
    assert_eq!(page_count(13, 6), 3);
}

#[test]
fn page_count_handles_degenerate_inputs() {
    assert_eq!(page_count(-3, 6), 0);
    assert_eq!(page_count(10, 0), 0);
}

// =============================================================
// Sliding window
// =============================================================

#[test]
fn page_window_centers_on_the_current_page() {
    assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn page_window_clamps_to_the_start() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn page_window_clamps_to_the_end() {
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
}

#[test]
fn page_window_shrinks_when_fewer_pages_exist() {
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_window(1, 1, 5), vec![1]);
}

#[test]
fn page_window_is_empty_without_pages() {
    assert!(page_window(1, 0, 5).is_empty());
}
