/// Errors raised while turning a raw string literal into its value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StringParsingError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("invalid escape sequence `{0}`")]
    InvalidEscapeSequence(String),

    #[error("invalid unicode escape `{0}`")]
    InvalidUnicodeEscape(String),
}
