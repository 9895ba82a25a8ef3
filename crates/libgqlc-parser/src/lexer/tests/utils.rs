use crate::SyntaxError;
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Lexes `source` to completion and returns the kinds of all tokens,
/// including the trailing `Eof`.
pub fn token_kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source)
        .map(|token| token.expect("unexpected lexer error").kind)
        .collect()
}

/// Lexes `source` and returns the first error.
pub fn first_error(source: &str) -> SyntaxError {
    Lexer::new(source)
        .find_map(Result::err)
        .unwrap_or_else(|| panic!("expected a lexer error for {source:?}"))
}

/// Lexes `source` and returns the raw text of every non-Eof token.
pub fn token_texts(source: &str) -> Vec<&str> {
    Lexer::new(source)
        .map(|token| token.expect("unexpected lexer error"))
        .filter(|token| token.kind != TokenKind::Eof)
        .map(|token| token.text)
        .collect()
}
