use crate::SyntaxErrorKind;
use crate::lexer::LexFailure;
use crate::lexer::describe_char_at;
use crate::NumberErrorReason;

fn digits_len(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn failure(text: &str, offset: usize, reason: NumberErrorReason) -> LexFailure {
    LexFailure::at_char(
        text,
        offset,
        SyntaxErrorKind::InvalidNumber { reason },
        format!(
            "invalid number: {reason}, received {}",
            describe_char_at(text, offset),
        ),
    )
}

/// Scans an `IntValue` or `FloatValue` at the start of `text`.
///
/// Returns the token's byte length and whether it is a float. Every
/// violation is reported at the offending character's offset.
pub(super) fn scan_number(text: &str) -> Result<(usize, bool), LexFailure> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    let integer_len = digits_len(bytes, pos);
    if integer_len == 0 {
        return Err(failure(text, pos, NumberErrorReason::DigitMustFollowSign));
    }
    if bytes[pos] == b'0' && integer_len > 1 {
        return Err(failure(text, pos + 1, NumberErrorReason::LeadingZero));
    }
    pos += integer_len;

    let mut is_float = false;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let fraction_len = digits_len(bytes, pos);
        if fraction_len == 0 {
            return Err(failure(text, pos, NumberErrorReason::DigitMustFollowDecimalPoint));
        }
        pos += fraction_len;
        is_float = true;
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        pos += 1;
        if let Some(b'-' | b'+') = bytes.get(pos) {
            pos += 1;
        }
        let exponent_len = digits_len(bytes, pos);
        if exponent_len == 0 {
            return Err(failure(text, pos, NumberErrorReason::DigitMustFollowExponent));
        }
        pos += exponent_len;
        is_float = true;

        match bytes.get(pos) {
            Some(b'.') => {
                return Err(failure(text, pos, NumberErrorReason::DecimalPointInExponent));
            },
            Some(b'e' | b'E') => {
                return Err(failure(text, pos, NumberErrorReason::MultipleExponents));
            },
            _ => {},
        }
    }

    match text[pos..].chars().next() {
        Some('.') => Err(failure(text, pos, NumberErrorReason::MultipleDecimalPoints)),
        Some(c) if c == '_' || c.is_alphanumeric() => {
            Err(failure(text, pos, NumberErrorReason::TrailingCharacter))
        },
        _ => Ok((pos, is_float)),
    }
}
