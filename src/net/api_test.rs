use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u123"), "/users/u123/");
}

#[test]
fn mood_entry_endpoint_formats_expected_path() {
    assert_eq!(mood_entry_endpoint("m1"), "/mood-entries/m1/");
}

#[test]
fn journal_endpoint_formats_expected_path() {
    assert_eq!(journal_endpoint("j9"), "/journals/j9/");
}

#[test]
fn mood_history_endpoint_carries_day_window() {
    assert_eq!(mood_history_endpoint(30), "/mood-entries/mood_history/?days=30");
}

#[test]
fn journals_endpoint_orders_newest_first() {
    assert_eq!(
        journals_endpoint(2, 6, "", true),
        "/journals/?page=2&page_size=6&ordering=-created_at"
    );
}

#[test]
fn journals_endpoint_orders_oldest_first() {
    assert_eq!(
        journals_endpoint(1, 6, "", false),
        "/journals/?page=1&page_size=6&ordering=created_at"
    );
}

#[test]
fn journals_endpoint_encodes_search_terms() {
    assert_eq!(
        journals_endpoint(1, 6, "bad day & worse", true),
        "/journals/?page=1&page_size=6&ordering=-created_at&search=bad%20day%20%26%20worse"
    );
}

#[test]
fn journals_endpoint_omits_blank_search() {
    assert_eq!(
        journals_endpoint(1, 6, "   ", true),
        "/journals/?page=1&page_size=6&ordering=-created_at"
    );
}

// =============================================================
// Component encoding
// =============================================================

#[test]
fn encode_component_passes_unreserved_characters() {
    assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_component_escapes_reserved_and_utf8() {
    assert_eq!(encode_component("a b?&=+"), "a%20b%3F%26%3D%2B");
    assert_eq!(encode_component("é"), "%C3%A9");
}

// =============================================================
// Error payload parsing
// =============================================================

#[test]
fn failure_message_prefers_error_key() {
    let body = r#"{"error": "Invalid credentials", "message": "other"}"#;
    assert_eq!(failure_message(body, LOGIN_FAILED), "Invalid credentials");
}

#[test]
fn failure_message_falls_back_to_message_key() {
    let body = r#"{"message": "Account disabled"}"#;
    assert_eq!(failure_message(body, LOGIN_FAILED), "Account disabled");
}

#[test]
fn failure_message_defaults_on_unusable_bodies() {
    assert_eq!(failure_message("", LOGIN_FAILED), "Login failed");
    assert_eq!(failure_message("<html>", SIGNUP_FAILED), "Signup failed");
    assert_eq!(failure_message(r#"{"error": 42}"#, LOGIN_FAILED), "Login failed");
}

#[test]
fn profile_failure_message_surfaces_field_errors() {
    let body = r#"{"username": ["A user with that username already exists."]}"#;
    assert_eq!(
        profile_failure_message(body),
        "Username: A user with that username already exists."
    );

    let body = r#"{"email": ["Enter a valid email address."]}"#;
    assert_eq!(profile_failure_message(body), "Email: Enter a valid email address.");
}

#[test]
fn profile_failure_message_defaults_without_field_errors() {
    assert_eq!(
        profile_failure_message(r#"{"detail": "forbidden"}"#),
        "Failed to update profile. Please try again."
    );
}
