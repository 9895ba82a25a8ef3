//! Lookahead buffer over a [`Lexer`] that hides ignorable tokens.

use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxError;
use crate::lexer::Lexer;
use crate::token::Token;
use crate::token::TokenKind;
use std::collections::VecDeque;

/// A token stream with unbounded lookahead over significant tokens.
///
/// Comments and commas are dropped. Once the lexer has produced its `Eof`
/// token, peeking past the end keeps returning that `Eof`. A lexical error
/// is surfaced the first time a peek or consume reaches it, and on every
/// later attempt.
pub struct TokenStream<'src> {
    lexer: Lexer<'src>,
    buffer: VecDeque<Token<'src>>,
    eof: Option<Token<'src>>,
    error: Option<SyntaxError>,
    last_end: SourcePosition,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            buffer: VecDeque::new(),
            eof: None,
            error: None,
            last_end: SourcePosition::default(),
        }
    }

    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// End position of the most recently consumed token.
    pub fn last_end(&self) -> SourcePosition {
        self.last_end
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count && self.eof.is_none() && self.error.is_none() {
            match self.lexer.next() {
                Some(Ok(token)) if token.is_ignorable() => {},
                Some(Ok(token)) => {
                    if token.kind == TokenKind::Eof {
                        self.eof = Some(token);
                    }
                    self.buffer.push_back(token);
                },
                Some(Err(error)) => self.error = Some(error),
                None => break,
            }
        }
    }

    /// Peek at the nth significant token ahead (0-indexed).
    pub fn peek_nth(&mut self, n: usize) -> Result<Token<'src>, SyntaxError> {
        self.ensure_buffer_has(n + 1);
        if let Some(token) = self.buffer.get(n) {
            return Ok(*token);
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.eof.ok_or_else(|| {
            SyntaxError::unexpected_eof("a token", SourceSpan::at(self.last_end))
        })
    }

    #[inline]
    pub fn peek(&mut self) -> Result<Token<'src>, SyntaxError> {
        self.peek_nth(0)
    }

    pub fn peek_kind(&mut self) -> Result<TokenKind, SyntaxError> {
        self.peek().map(|token| token.kind)
    }

    /// Returns `true` if the next token has the given kind.
    pub fn at(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        Ok(self.peek_kind()? == kind)
    }

    /// Returns `true` if the next token is the name `keyword`.
    pub fn at_keyword(&mut self, keyword: &str) -> Result<bool, SyntaxError> {
        Ok(self.peek()?.is_keyword(keyword))
    }

    pub fn consume(&mut self) -> Result<Token<'src>, SyntaxError> {
        let token = self.peek()?;
        if token.kind != TokenKind::Eof {
            self.buffer.pop_front();
        }
        self.last_end = token.span.end_exclusive;
        Ok(token)
    }

    /// Consumes the next token if it has kind `kind`, otherwise fails with an
    /// "expected `expected`, received ..." error.
    pub fn expect(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<Token<'src>, SyntaxError> {
        let token = self.peek()?;
        if token.kind != kind {
            return Err(Self::unexpected(expected, &token));
        }
        self.consume()
    }

    /// Consumes a name. `null` is accepted as a name in name positions.
    pub fn expect_name(&mut self, expected: &str) -> Result<Token<'src>, SyntaxError> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Name | TokenKind::Null => self.consume(),
            _ => Err(Self::unexpected(expected, &token)),
        }
    }

    /// Consumes the next token if it has kind `kind`.
    pub fn consume_if(&mut self, kind: TokenKind) -> Result<Option<Token<'src>>, SyntaxError> {
        if self.at(kind)? {
            self.consume().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Builds an "expected X, received Y" error for `token`.
    pub fn unexpected(expected: &str, token: &Token<'src>) -> SyntaxError {
        if token.kind == TokenKind::Eof {
            SyntaxError::unexpected_eof(expected, token.span)
        } else {
            SyntaxError::unexpected_token(expected, token.text, token.span)
        }
    }

    pub fn is_at_end(&mut self) -> Result<bool, SyntaxError> {
        self.at(TokenKind::Eof)
    }
}
