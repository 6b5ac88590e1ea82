use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn valid_email_accepts_common_addresses() {
    assert!(valid_email("alice@example.com"));
    assert!(valid_email("a.b+tag@mail.example.org"));
}

#[test]
fn valid_email_rejects_malformed_addresses() {
    assert!(!valid_email(""));
    assert!(!valid_email("alice"));
    assert!(!valid_email("alice@"));
    assert!(!valid_email("@example.com"));
    assert!(!valid_email("alice@example"));
    assert!(!valid_email("alice@.com"));
    assert!(!valid_email("alice@example."));
    assert!(!valid_email("al ice@example.com"));
    assert!(!valid_email("alice@exa@mple.com"));
}

// =============================================================
// Signup form
// =============================================================

fn valid_form() -> SignupErrors {
    validate_signup("alice", "alice@example.com", "Alice", "Lee", "hunter2hunter2", "hunter2hunter2")
}

#[test]
fn validate_signup_passes_a_complete_form() {
    assert!(valid_form().is_empty());
}

#[test]
fn validate_signup_requires_every_field() {
    let errors = validate_signup("", "", "", "", "", "");
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.first_name, Some("First name is required"));
    assert_eq!(errors.last_name, Some("Last name is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.confirm_password, Some("Please confirm your password"));
}

#[test]
fn validate_signup_flags_short_username_and_password() {
    let errors = validate_signup("al", "alice@example.com", "A", "L", "short", "short");
    assert_eq!(errors.username, Some("Username must be at least 3 characters"));
    assert_eq!(errors.password, Some("Password must be at least 8 characters"));
}

#[test]
fn validate_signup_flags_mismatched_confirmation() {
    let errors =
        validate_signup("alice", "alice@example.com", "A", "L", "hunter2hunter2", "hunter3");
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
    assert!(errors.password.is_none());
}
