use crate::SyntaxErrorKind;
use crate::lexer::LexFailure;
use crate::token::TokenKind;

/// Scans a punctuator at the start of `text`.
///
/// Every punctuator is a single character except the spread `...`; a run of
/// one or two dots, or any character that begins no token, is an error.
pub(super) fn scan_glyph(text: &str) -> Result<(TokenKind, usize), LexFailure> {
    let Some(first) = text.chars().next() else {
        return Err(LexFailure::new(
            0,
            0,
            SyntaxErrorKind::UnexpectedToken {
                expected: "token".to_string(),
                found: "end of input".to_string(),
            },
            "unexpected end of input",
        ));
    };

    let kind = match first {
        '@' => TokenKind::At,
        '!' => TokenKind::Bang,
        ':' => TokenKind::Colon,
        '}' => TokenKind::CurlyBraceClose,
        '{' => TokenKind::CurlyBraceOpen,
        '$' => TokenKind::Dollar,
        '=' => TokenKind::Equals,
        ')' => TokenKind::ParenClose,
        '(' => TokenKind::ParenOpen,
        '|' => TokenKind::Pipe,
        ']' => TokenKind::SquareBracketClose,
        '[' => TokenKind::SquareBracketOpen,
        '.' => {
            if text.starts_with("...") {
                return Ok((TokenKind::Ellipsis, 3));
            }
            let dots = text.bytes().take_while(|b| *b == b'.').count();
            return Err(LexFailure::new(
                0,
                dots,
                SyntaxErrorKind::UnexpectedToken {
                    expected: "`...`".to_string(),
                    found: text[..dots].to_string(),
                },
                format!("expected `...`, received `{}`", &text[..dots]),
            ));
        },
        c if c.is_alphabetic() => {
            return Err(LexFailure::at_char(
                text,
                0,
                SyntaxErrorKind::InvalidName { character: c },
                format!("invalid character `{c}` at the start of a name"),
            ));
        },
        c => {
            return Err(LexFailure::at_char(
                text,
                0,
                SyntaxErrorKind::UnexpectedCharacter { character: c },
                format!("unexpected character `{}`", c.escape_debug()),
            ));
        },
    };
    Ok((kind, 1))
}
