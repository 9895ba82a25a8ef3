use crate::NumberErrorReason;
use crate::SyntaxErrorKind;
use crate::lexer::tests::utils::first_error;
use crate::lexer::tests::utils::token_kinds;
use crate::lexer::tests::utils::token_texts;
use crate::token::TokenKind;

fn number_error_at(source: &str) -> (NumberErrorReason, usize) {
    let error = first_error(source);
    match error.kind() {
        SyntaxErrorKind::InvalidNumber { reason } => {
            (*reason, error.span().start_inclusive.byte_offset())
        },
        other => panic!("expected InvalidNumber for {source:?}, got {other:?}"),
    }
}

// =============================================================================
// Accepted numbers
// =============================================================================

#[test]
fn accepts_integers_and_floats() {
    assert_eq!(
        token_kinds("1234 -12.5 1.2e10 -1.2E-10 0 -0 1e+5"),
        vec![
            TokenKind::IntValue,
            TokenKind::FloatValue,
            TokenKind::FloatValue,
            TokenKind::FloatValue,
            TokenKind::IntValue,
            TokenKind::IntValue,
            TokenKind::FloatValue,
            TokenKind::Eof,
        ],
    );
    assert_eq!(token_texts("-1.2E-10"), vec!["-1.2E-10"]);
}

#[test]
fn number_may_be_followed_by_punctuator() {
    assert_eq!(
        token_kinds("[1,2]"),
        vec![
            TokenKind::SquareBracketOpen,
            TokenKind::IntValue,
            TokenKind::Comma,
            TokenKind::IntValue,
            TokenKind::SquareBracketClose,
            TokenKind::Eof,
        ],
    );
}

// =============================================================================
// Rejected numbers, each at the violating offset
// =============================================================================

#[test]
fn digit_must_follow_decimal_point() {
    assert_eq!(number_error_at("1..2"), (NumberErrorReason::DigitMustFollowDecimalPoint, 2));
    assert_eq!(number_error_at("1. "), (NumberErrorReason::DigitMustFollowDecimalPoint, 2));
}

#[test]
fn only_one_decimal_point() {
    assert_eq!(number_error_at("1.2.3"), (NumberErrorReason::MultipleDecimalPoints, 3));
}

#[test]
fn digit_must_follow_exponent() {
    assert_eq!(number_error_at("1e"), (NumberErrorReason::DigitMustFollowExponent, 2));
    assert_eq!(number_error_at("1.5E-"), (NumberErrorReason::DigitMustFollowExponent, 5));
}

#[test]
fn only_one_exponent() {
    assert_eq!(number_error_at("1e5e2"), (NumberErrorReason::MultipleExponents, 3));
    assert_eq!(number_error_at("1e5.2"), (NumberErrorReason::DecimalPointInExponent, 3));
}

#[test]
fn digit_must_follow_sign() {
    assert_eq!(number_error_at("-a"), (NumberErrorReason::DigitMustFollowSign, 1));
    assert_eq!(number_error_at("- 1"), (NumberErrorReason::DigitMustFollowSign, 1));
}

#[test]
fn leading_zero_rejected() {
    assert_eq!(number_error_at("01"), (NumberErrorReason::LeadingZero, 1));
    assert_eq!(number_error_at("-007"), (NumberErrorReason::LeadingZero, 2));
}

#[test]
fn trailing_name_character_rejected() {
    assert_eq!(number_error_at("123abc"), (NumberErrorReason::TrailingCharacter, 3));
    assert_eq!(number_error_at("1.5_"), (NumberErrorReason::TrailingCharacter, 3));
}

#[test]
fn offset_is_relative_to_document() {
    let error = first_error("query { f(a: 1.2.3) }");
    assert_eq!(error.span().start_inclusive.byte_offset(), 16);
    assert_eq!(error.span().start_inclusive.column(), 16);
}
