//! General lexer behaviour: punctuators, ignorable tokens, positions and
//! termination.

use crate::SyntaxErrorKind;
use crate::lexer::Lexer;
use crate::lexer::tests::utils::first_error;
use crate::lexer::tests::utils::token_kinds;
use crate::token::TokenKind;

// =============================================================================
// Punctuators
// =============================================================================

#[test]
fn lexes_every_punctuator() {
    assert_eq!(
        token_kinds("{ } ( ) [ ] ! $ : = @ | ..."),
        vec![
            TokenKind::CurlyBraceOpen,
            TokenKind::CurlyBraceClose,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::SquareBracketOpen,
            TokenKind::SquareBracketClose,
            TokenKind::Bang,
            TokenKind::Dollar,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::At,
            TokenKind::Pipe,
            TokenKind::Ellipsis,
            TokenKind::Eof,
        ],
    );
}

/// A run of one or two dots is not a spread.
#[test]
fn rejects_partial_spread() {
    let error = first_error("{ .. }");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedToken { .. }));
    assert_eq!(error.span().start_inclusive.column(), 2);
    assert_eq!(error.message(), "expected `...`, received `..`");

    let error = first_error(".");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedToken { .. }));
}

#[test]
fn rejects_unknown_character() {
    let error = first_error("{ name % }");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnexpectedCharacter { character: '%' },
    ));
    assert_eq!(error.span().start_inclusive.byte_offset(), 7);
}

/// `&` is only meaningful in type system documents.
#[test]
fn rejects_ampersand() {
    let error = first_error("&");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnexpectedCharacter { character: '&' },
    ));
}

// =============================================================================
// Ignorable tokens and whitespace
// =============================================================================

#[test]
fn comments_and_commas_are_ignorable_tokens() {
    let tokens: Vec<_> = Lexer::new("a, # trailing\nb")
        .map(|token| token.unwrap())
        .collect();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name,
            TokenKind::Comma,
            TokenKind::Comment,
            TokenKind::Name,
            TokenKind::Eof,
        ],
    );
    assert!(tokens[1].is_ignorable());
    assert!(tokens[2].is_ignorable());
    assert!(!tokens[0].is_ignorable());
    assert_eq!(tokens[2].text, "# trailing");
}

#[test]
fn byte_order_mark_is_whitespace() {
    assert_eq!(token_kinds("\u{FEFF}query"), vec![TokenKind::Name, TokenKind::Eof]);
}

#[test]
fn empty_source_yields_only_eof() {
    assert_eq!(token_kinds(""), vec![TokenKind::Eof]);
    assert_eq!(token_kinds("  \n\t "), vec![TokenKind::Eof]);
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn tracks_lines_and_columns() {
    let tokens: Vec<_> = Lexer::new("{\n  hero\r\n  name\n}")
        .map(|token| token.unwrap())
        .collect();
    let hero = tokens[1];
    assert_eq!(hero.text, "hero");
    assert_eq!(hero.span.start_inclusive.line(), 1);
    assert_eq!(hero.span.start_inclusive.column(), 2);
    assert_eq!(hero.span.start_inclusive.byte_offset(), 4);

    let name = tokens[2];
    assert_eq!(name.span.start_inclusive.line(), 2);
    assert_eq!(name.span.start_inclusive.column(), 2);

    let close = tokens[3];
    assert_eq!(close.span.start_inclusive.line(), 3);
    assert_eq!(close.span.start_inclusive.column(), 0);
}

#[test]
fn columns_count_characters_not_bytes() {
    let tokens: Vec<_> = Lexer::new("\"ÄÖ\" x")
        .map(|token| token.unwrap())
        .collect();
    assert_eq!(tokens[1].span.start_inclusive.column(), 5);
    assert_eq!(tokens[1].span.start_inclusive.byte_offset(), 7);
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn stops_after_eof() {
    let mut lexer = Lexer::new("a");
    assert!(lexer.next().is_some());
    assert!(matches!(lexer.next(), Some(Ok(token)) if token.kind == TokenKind::Eof));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn stops_after_first_error() {
    let mut lexer = Lexer::new("a % b");
    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
}

#[test]
fn null_is_its_own_token_kind() {
    assert_eq!(
        token_kinds("null nullable true"),
        vec![TokenKind::Null, TokenKind::Name, TokenKind::Name, TokenKind::Eof],
    );
}
