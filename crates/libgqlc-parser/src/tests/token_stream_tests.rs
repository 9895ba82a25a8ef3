use crate::SyntaxErrorKind;
use crate::TokenStream;
use crate::token::TokenKind;

#[test]
fn skips_ignorable_tokens() {
    let mut stream = TokenStream::new("a, # c\n b");
    assert_eq!(stream.consume().unwrap().text, "a");
    assert_eq!(stream.consume().unwrap().text, "b");
    assert_eq!(stream.consume().unwrap().kind, TokenKind::Eof);
}

#[test]
fn peek_nth_does_not_consume() {
    let mut stream = TokenStream::new("... on Foo");
    assert_eq!(stream.peek_nth(2).unwrap().text, "Foo");
    assert_eq!(stream.peek().unwrap().kind, TokenKind::Ellipsis);
    assert!(stream.at_keyword("on").is_ok_and(|at| !at));
}

#[test]
fn eof_repeats_past_end() {
    let mut stream = TokenStream::new("x");
    assert_eq!(stream.peek_nth(5).unwrap().kind, TokenKind::Eof);
    stream.consume().unwrap();
    assert!(stream.is_at_end().unwrap());
    assert_eq!(stream.consume().unwrap().kind, TokenKind::Eof);
    assert_eq!(stream.consume().unwrap().kind, TokenKind::Eof);
}

#[test]
fn lexer_error_surfaces_when_reached() {
    let mut stream = TokenStream::new("a b %");
    assert_eq!(stream.consume().unwrap().text, "a");
    assert_eq!(stream.peek().unwrap().text, "b");
    let error = stream.peek_nth(1).unwrap_err();
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedCharacter { .. }));
    assert_eq!(stream.consume().unwrap().text, "b");
    assert!(stream.consume().is_err());
}

#[test]
fn expect_reports_expected_and_received() {
    let mut stream = TokenStream::new("foo");
    let error = stream.expect(TokenKind::Colon, "`:`").unwrap_err();
    assert_eq!(error.message(), "expected `:`, received `foo`");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnexpectedToken { expected, found }
            if expected == "`:`" && found == "foo"
    ));
}

#[test]
fn expect_name_accepts_null() {
    let mut stream = TokenStream::new("null");
    assert_eq!(stream.expect_name("name").unwrap().text, "null");
}
