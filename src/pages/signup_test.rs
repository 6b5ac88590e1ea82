use super::*;

#[test]
fn signup_form_trims_identity_fields() {
    let form = signup_form(" alice ", " alice@example.com ", " Alice ", " Lee ", "hunter2+8");
    assert_eq!(form.username, "alice");
    assert_eq!(form.email, "alice@example.com");
    assert_eq!(form.first_name, "Alice");
    assert_eq!(form.last_name, "Lee");
}

#[test]
fn signup_form_keeps_the_password_untrimmed() {
    let form = signup_form("alice", "alice@example.com", "A", "L", " spaced pass ");
    assert_eq!(form.password, " spaced pass ");
}

#[test]
fn signup_form_serializes_without_a_confirmation_field() {
    let form = signup_form("alice", "alice@example.com", "A", "L", "hunter2+8");
    let json = serde_json::to_value(&form).unwrap();
    assert!(json.get("confirm_password").is_none());
    assert_eq!(json.get("username").and_then(|v| v.as_str()), Some("alice"));
}
