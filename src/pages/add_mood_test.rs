use super::*;

#[test]
fn notes_payload_trims_content() {
    assert_eq!(notes_payload("  rough morning  "), Some("rough morning".to_owned()));
}

#[test]
fn notes_payload_omits_blank_notes() {
    assert_eq!(notes_payload(""), None);
    assert_eq!(notes_payload("   \n\t"), None);
}
