use super::*;

#[test]
fn new_slot_is_empty() {
    let credentials = Credentials::new();
    assert!(credentials.current().is_none());
    assert!(credentials.restore_persisted().is_none());
}

#[test]
fn store_then_clear_round_trips() {
    let credentials = Credentials::new();
    credentials.store("t1");
    assert_eq!(credentials.current().as_deref(), Some("t1"));

    credentials.clear();
    assert!(credentials.current().is_none());
}

#[test]
fn copies_share_the_same_slot() {
    let credentials = Credentials::new();
    let copy = credentials;
    credentials.store("t2");
    assert_eq!(copy.current().as_deref(), Some("t2"));
}

#[test]
fn store_overwrites_previous_credential() {
    let credentials = Credentials::new();
    credentials.store("old");
    credentials.store("new");
    assert_eq!(credentials.current().as_deref(), Some("new"));
}
