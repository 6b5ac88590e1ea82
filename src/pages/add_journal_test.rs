use super::*;

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_journal_input_trims_both_fields() {
    assert_eq!(
        validate_journal_input("  Title  ", "  body  "),
        Ok(("Title".to_owned(), "body".to_owned()))
    );
}

#[test]
fn validate_journal_input_requires_a_title_first() {
    assert_eq!(
        validate_journal_input("   ", ""),
        Err("Please enter a title for your journal entry")
    );
}

#[test]
fn validate_journal_input_requires_content() {
    assert_eq!(
        validate_journal_input("Title", "   "),
        Err("Please write some content for your journal entry")
    );
}

// =============================================================
// Suggested titles
// =============================================================

#[test]
fn suggested_title_without_mood() {
    assert_eq!(suggested_title("January 5, 2026", None), "Journal Entry - January 5, 2026");
}

#[test]
fn suggested_title_with_linked_mood() {
    assert_eq!(suggested_title("January 5, 2026", Some(4)), "January 5, 2026 - Happy Day");
}
