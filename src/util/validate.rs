//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! These checks only guard obvious mistakes before a round trip; the backend
//! remains the authority and its field errors are surfaced unmodified.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// with a dot separating non-empty labels.
pub fn valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Passwords must be at least eight characters.
pub fn valid_password(password: &str) -> bool {
    password.len() >= 8
}

/// Per-field signup validation errors; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Validate the signup form fields, mirroring the backend's basic rules.
pub fn validate_signup(
    username: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
    confirm_password: &str,
) -> SignupErrors {
    let mut errors = SignupErrors::default();

    if username.trim().is_empty() {
        errors.username = Some("Username is required");
    } else if username.trim().len() < 3 {
        errors.username = Some("Username must be at least 3 characters");
    }

    if email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !valid_email(email.trim()) {
        errors.email = Some("Please enter a valid email address");
    }

    if first_name.trim().is_empty() {
        errors.first_name = Some("First name is required");
    }

    if last_name.trim().is_empty() {
        errors.last_name = Some("Last name is required");
    }

    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if !valid_password(password) {
        errors.password = Some("Password must be at least 8 characters");
    }

    if confirm_password.is_empty() {
        errors.confirm_password = Some("Please confirm your password");
    } else if password != confirm_password {
        errors.confirm_password = Some("Passwords do not match");
    }

    errors
}
