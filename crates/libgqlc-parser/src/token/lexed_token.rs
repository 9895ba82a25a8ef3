use crate::SourceSpan;
use crate::token::TokenKind;

/// A lexed token borrowing its text from the source buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,

    /// The exact source slice this token covers (quotes included for
    /// strings, leading `-` included for numbers).
    pub text: &'src str,

    pub span: SourceSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: SourceSpan) -> Self {
        Self { kind, text, span }
    }

    pub fn is_ignorable(&self) -> bool {
        self.kind.is_ignorable()
    }

    /// Returns `true` if this token is the name `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.text == keyword
    }
}
