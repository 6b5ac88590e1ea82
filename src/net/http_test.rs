use super::*;

#[test]
fn endpoint_prefixes_api_routes() {
    assert_eq!(endpoint("/auth/user/"), "/api/auth/user/");
    assert_eq!(endpoint("/journals/"), "/api/journals/");
}

#[test]
fn authorization_absent_without_credential() {
    let http = Http::new(Credentials::new());
    assert!(http.authorization().is_none());
}

#[test]
fn authorization_uses_token_scheme() {
    let credentials = Credentials::new();
    credentials.store("t1");
    let http = Http::new(credentials);
    assert_eq!(http.authorization().as_deref(), Some("Token t1"));
}

#[test]
fn authorization_follows_credential_changes() {
    let credentials = Credentials::new();
    let http = Http::new(credentials);

    credentials.store("first");
    assert_eq!(http.authorization().as_deref(), Some("Token first"));

    credentials.clear();
    assert!(http.authorization().is_none());
}
