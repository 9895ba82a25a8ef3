/// Categorizes syntax errors for programmatic handling.
///
/// Each variant carries the minimal data needed for programmatic decisions.
/// Human-readable context belongs in [`SyntaxError::message()`] and its
/// notes.
///
/// [`SyntaxError::message()`]: crate::SyntaxError::message
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A character that cannot begin any token.
    #[error("unexpected character `{character}`")]
    UnexpectedCharacter {
        character: char,
    },

    /// A name containing a character outside `[_A-Za-z0-9]`.
    #[error("invalid name character `{character}`")]
    InvalidName {
        character: char,
    },

    /// A numeric literal that violates the number grammar. The error's span
    /// points at the violating character, not the start of the number.
    #[error("invalid number: {reason}")]
    InvalidNumber {
        reason: NumberErrorReason,
    },

    /// A string or block string with no closing delimiter.
    #[error("unterminated string, expected `{expected}`")]
    UnterminatedString {
        expected: &'static str,
    },

    /// A `\` inside a string that does not begin a recognized escape.
    #[error("invalid escape sequence `{sequence}`")]
    InvalidEscapeSequence {
        sequence: String,
    },

    /// Expected specific token(s) but found something else.
    #[error("expected {expected}, received `{found}`")]
    UnexpectedToken {
        expected: String,
        found: String,
    },

    /// The document ended where more tokens were required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: String,
    },

    /// A list, object, selection set or argument list was not closed.
    #[error("unterminated `{delimiter}`")]
    UnterminatedCollection {
        delimiter: &'static str,
    },

    /// A construct that must contain at least one item was empty.
    #[error("`{construct}` cannot be empty")]
    InvalidEmptyConstruct {
        construct: &'static str,
    },

    /// A reserved name used where it is not allowed (e.g. `fragment on`).
    #[error("`{name}` is reserved here")]
    ReservedName {
        name: String,
    },

    /// Nesting exceeded the configured maximum depth.
    #[error("maximum nesting depth of {max_depth} exceeded")]
    MaxDepthExceeded {
        max_depth: usize,
    },
}

/// Which part of the number grammar a numeric literal violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumberErrorReason {
    #[error("a digit must follow `-`")]
    DigitMustFollowSign,

    #[error("a digit must follow the decimal point")]
    DigitMustFollowDecimalPoint,

    #[error("a digit must follow the exponent indicator")]
    DigitMustFollowExponent,

    #[error("only one decimal point is allowed")]
    MultipleDecimalPoints,

    #[error("only one exponent indicator is allowed")]
    MultipleExponents,

    #[error("a decimal point cannot appear in the exponent")]
    DecimalPointInExponent,

    #[error("leading zeros are not allowed")]
    LeadingZero,

    #[error("a number cannot be immediately followed by a name character")]
    TrailingCharacter,
}
