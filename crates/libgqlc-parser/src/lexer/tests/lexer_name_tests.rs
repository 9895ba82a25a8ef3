use crate::SyntaxErrorKind;
use crate::lexer::tests::utils::first_error;
use crate::lexer::tests::utils::token_texts;
use crate::lexer::validate_name;

#[test]
fn names_may_start_with_underscore_or_letter() {
    assert_eq!(token_texts("_a a_1 __typename Z9"), vec!["_a", "a_1", "__typename", "Z9"]);
}

#[test]
fn digits_cannot_start_a_name() {
    // `1abc` is a number immediately followed by a name character.
    let error = first_error("1abc");
    assert!(matches!(error.kind(), SyntaxErrorKind::InvalidNumber { .. }));
    assert_eq!(error.span().start_inclusive.byte_offset(), 1);
}

/// A non-ASCII letter at the start of a name is rejected at the name's start.
#[test]
fn non_ascii_first_character_rejected_at_name_start() {
    let error = first_error("{ ärger }");
    assert!(matches!(error.kind(), SyntaxErrorKind::InvalidName { character: 'ä' }));
    assert_eq!(error.span().start_inclusive.byte_offset(), 2);
}

#[test]
fn non_ascii_character_inside_name_rejected_at_its_offset() {
    let error = first_error("{ namé }");
    assert!(matches!(error.kind(), SyntaxErrorKind::InvalidName { character: 'é' }));
    assert_eq!(error.span().start_inclusive.byte_offset(), 5);
    assert_eq!(error.span().start_inclusive.column(), 5);
}

#[test]
fn validate_name_reports_offending_character() {
    assert_eq!(validate_name("valid_Name9"), Ok(()));
    assert_eq!(validate_name(""), Err((0, '\0')));
    assert_eq!(validate_name("9lives"), Err((0, '9')));
    assert_eq!(validate_name("has-dash"), Err((3, '-')));
}
