use super::*;

#[test]
fn validate_login_input_trims_the_username() {
    assert_eq!(
        validate_login_input("  alice  ", "hunter2"),
        Ok(("alice".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "hunter2"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("alice", " spaced pass "),
        Ok(("alice".to_owned(), " spaced pass ".to_owned()))
    );
}
