use super::*;

// =============================================================
// Profile form validation
// =============================================================

#[test]
fn validate_profile_input_accepts_valid_fields() {
    assert_eq!(validate_profile_input("alice", "alice@example.com"), Ok(()));
}

#[test]
fn validate_profile_input_requires_username_then_email() {
    assert_eq!(validate_profile_input("  ", "alice@example.com"), Err("Username is required"));
    assert_eq!(validate_profile_input("alice", "   "), Err("Email is required"));
    assert_eq!(
        validate_profile_input("alice", "not-an-email"),
        Err("Please enter a valid email address")
    );
}

// =============================================================
// Password change validation
// =============================================================

#[test]
fn validate_password_change_accepts_a_valid_change() {
    assert_eq!(validate_password_change("old-pass", "new-pass-123", "new-pass-123"), Ok(()));
}

#[test]
fn validate_password_change_checks_fields_in_order() {
    assert_eq!(
        validate_password_change("", "new-pass-123", "new-pass-123"),
        Err("Current password is required")
    );
    assert_eq!(validate_password_change("old", "", ""), Err("New password is required"));
    assert_eq!(
        validate_password_change("old", "short", "short"),
        Err("New password must be at least 8 characters long")
    );
    assert_eq!(
        validate_password_change("old", "new-pass-123", "new-pass-124"),
        Err("New passwords do not match")
    );
}

// =============================================================
// Session merge patch
// =============================================================

#[test]
fn merge_patch_carries_the_editable_fields() {
    let account = Account {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Lee".to_owned(),
        bio: "hello".to_owned(),
        date_joined: Some("2025-01-01T00:00:00Z".to_owned()),
        profile_picture: None,
    };
    let patch = merge_patch(&account);
    assert_eq!(patch.username.as_deref(), Some("alice"));
    assert_eq!(patch.bio.as_deref(), Some("hello"));
    assert_eq!(patch.email.as_deref(), Some("alice@example.com"));
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn tab_class_marks_the_active_tab() {
    assert_eq!(tab_class("profile", "profile"), "tab tab--active");
    assert_eq!(tab_class("profile", "password"), "tab");
}
