/// The kind of a lexed token.
///
/// Literal tokens carry no payload; their raw text lives on the enclosing
/// [`Token`](crate::token::Token). `true` and `false` lex as `Name`, and
/// negative numbers lex as a single `IntValue`/`FloatValue`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    Name,
    /// The `null` keyword.
    Null,
    IntValue,
    FloatValue,
    /// A normal or block string, quotes included.
    StringValue,

    /// `#` through the end of the line.
    Comment,

    Eof,
}

impl TokenKind {
    /// Comments and commas carry no meaning in executable documents.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, TokenKind::Comma | TokenKind::Comment)
    }

    /// Returns the source text of this token kind if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::Colon => Some(":"),
            TokenKind::Comma => Some(","),
            TokenKind::CurlyBraceClose => Some("}"),
            TokenKind::CurlyBraceOpen => Some("{"),
            TokenKind::Dollar => Some("$"),
            TokenKind::Ellipsis => Some("..."),
            TokenKind::Equals => Some("="),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::SquareBracketClose => Some("]"),
            TokenKind::SquareBracketOpen => Some("["),

            TokenKind::Name
            | TokenKind::Null
            | TokenKind::IntValue
            | TokenKind::FloatValue
            | TokenKind::StringValue
            | TokenKind::Comment
            | TokenKind::Eof => None,
        }
    }

    /// Returns `true` for tokens that begin a scalar literal value.
    pub fn is_scalar_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntValue
                | TokenKind::FloatValue
                | TokenKind::StringValue
                | TokenKind::Null,
        )
    }

    /// A short human description used in "expected X, received Y" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Name => "name",
            TokenKind::Null => "null",
            TokenKind::IntValue => "integer",
            TokenKind::FloatValue => "float",
            TokenKind::StringValue => "string",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
            punctuator => punctuator.as_punctuator_str().unwrap_or("punctuator"),
        }
    }
}
