use super::*;

#[test]
fn link_class_highlights_the_current_route() {
    assert_eq!(link_class("/dashboard", "/dashboard"), "nav__link nav__link--active");
    assert_eq!(link_class("/dashboard", "/journals"), "nav__link");
}

#[test]
fn nav_display_name_prefers_first_name() {
    assert_eq!(nav_display_name("Alice", "alice99"), "Alice");
    assert_eq!(nav_display_name("", "alice99"), "alice99");
}
