//! Converts source text into a lazy sequence of located [`Token`]s.
//!
//! Each lexical category is recognized by its own scanner (`name`, `number`,
//! `string`, `comment`, `glyph`). A scanner looks only at the remaining text
//! and reports either the byte length of the token it recognized or a
//! `LexFailure` locating the offending character relative to the token's
//! start. The [`Lexer`] turns those offsets into source positions.
//!
//! ```rust
//! use libgqlc_parser::lexer::Lexer;
//! use libgqlc_parser::token::TokenKind;
//!
//! let kinds: Vec<TokenKind> = Lexer::new("{ name }")
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     TokenKind::CurlyBraceOpen,
//!     TokenKind::Name,
//!     TokenKind::CurlyBraceClose,
//!     TokenKind::Eof,
//! ]);
//! ```

mod comment;
mod glyph;
mod name;
mod number;
mod string;

pub use name::validate_name;

use crate::ErrorNotes;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::token::Token;
use crate::token::TokenKind;

/// A scanner's description of a malformed token.
#[derive(Debug)]
pub(crate) struct LexFailure {
    /// Byte offset of the offending text, relative to the token start.
    pub offset: usize,
    /// Byte length of the offending text (at least one character where
    /// possible, zero at end of input).
    pub len: usize,
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub notes: ErrorNotes,
}

impl LexFailure {
    pub fn new(
        offset: usize,
        len: usize,
        kind: SyntaxErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            offset,
            len,
            kind,
            message: message.into(),
            notes: ErrorNotes::new(),
        }
    }

    /// A failure covering the character at `offset` in `text` (or nothing,
    /// at end of input).
    pub fn at_char(
        text: &str,
        offset: usize,
        kind: SyntaxErrorKind,
        message: impl Into<String>,
    ) -> Self {
        let len = text[offset..].chars().next().map_or(0, char::len_utf8);
        Self::new(offset, len, kind, message)
    }
}

/// Returns the character at `offset`, described for error messages.
pub(crate) fn describe_char_at(text: &str, offset: usize) -> String {
    match text[offset..].chars().next() {
        None => "end of input".to_string(),
        Some('\n') | Some('\r') => "line terminator".to_string(),
        Some(c) => format!("`{c}`"),
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}')
}

/// A lazy, forward-only lexer over a single source document.
///
/// Yields `Ok` tokens up to and including one [`TokenKind::Eof`], or stops
/// after yielding the first `Err`. A fresh `Lexer` is needed per document.
pub struct Lexer<'src> {
    source: &'src str,
    position: SourcePosition,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: SourcePosition::default(),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.position.byte_offset()..]
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remaining();
        let ws_len = remaining
            .find(|c: char| !is_whitespace(c))
            .unwrap_or(remaining.len());
        if ws_len > 0 {
            self.position = self.position.advanced_over(&remaining[..ws_len]);
        }
    }

    fn scan_token(&self, text: &str) -> Result<(TokenKind, usize), LexFailure> {
        // Callers guarantee `text` is non-empty.
        let first = text.chars().next().unwrap_or('\0');
        match first {
            '#' => Ok((TokenKind::Comment, comment::scan_comment(text))),
            ',' => Ok((TokenKind::Comma, 1)),
            '"' => string::scan_string(text).map(|len| (TokenKind::StringValue, len)),
            '-' | '0'..='9' => number::scan_number(text).map(|(len, is_float)| {
                let kind = if is_float {
                    TokenKind::FloatValue
                } else {
                    TokenKind::IntValue
                };
                (kind, len)
            }),
            c if name::is_name_start(c) => {
                let len = name::scan_name(text)?;
                let kind = if &text[..len] == "null" {
                    TokenKind::Null
                } else {
                    TokenKind::Name
                };
                Ok((kind, len))
            },
            _ => glyph::scan_glyph(text),
        }
    }

    fn failure_to_error(&self, text: &str, failure: LexFailure) -> SyntaxError {
        let start = self.position.advanced_over(&text[..failure.offset]);
        let end = start.advanced_over(&text[failure.offset..failure.offset + failure.len]);
        let mut error = SyntaxError::new(
            failure.message,
            SourceSpan::new(start, end),
            failure.kind,
        );
        for note in failure.notes {
            error = error.with_note(note);
        }
        error
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();
        let text = self.remaining();
        if text.is_empty() {
            self.finished = true;
            return Some(Ok(Token::new(
                TokenKind::Eof,
                text,
                SourceSpan::at(self.position),
            )));
        }

        match self.scan_token(text) {
            Ok((kind, len)) => {
                let token_text = &text[..len];
                let start = self.position;
                let end = start.advanced_over(token_text);
                self.position = end;
                log::trace!("lexed {kind:?} at {start}");
                Some(Ok(Token::new(kind, token_text, SourceSpan::new(start, end))))
            },
            Err(failure) => {
                self.finished = true;
                let error = self.failure_to_error(text, failure);
                log::debug!("lexing stopped: {}", error.message());
                Some(Err(error))
            },
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests;
