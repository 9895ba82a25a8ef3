use crate::SyntaxErrorKind;
use crate::lexer::LexFailure;

pub(super) fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub(super) fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Checks that `text` is exactly one name (`[_A-Za-z][_A-Za-z0-9]*`).
///
/// On failure returns the byte offset and the offending character; an empty
/// string fails at offset 0 with `'\0'`.
pub fn validate_name(text: &str) -> Result<(), (usize, char)> {
    let mut chars = text.char_indices();
    match chars.next() {
        None => return Err((0, '\0')),
        Some((_, c)) if !is_name_start(c) => return Err((0, c)),
        Some(_) => {},
    }
    match chars.find(|(_, c)| !is_name_continue(*c)) {
        Some(offending) => Err(offending),
        None => Ok(()),
    }
}

/// Scans a name starting at the beginning of `text`.
///
/// A name runs until the first character outside `[_A-Za-z0-9]`. A
/// non-ASCII letter or digit directly attached to the name is reported as
/// an invalid name character rather than silently splitting the token.
pub(super) fn scan_name(text: &str) -> Result<usize, LexFailure> {
    let len = text
        .char_indices()
        .find(|(_, c)| !is_name_continue(*c))
        .map_or(text.len(), |(idx, _)| idx);

    if let Some(next) = text[len..].chars().next()
        && next.is_alphanumeric()
    {
        return Err(LexFailure::at_char(
            text,
            len,
            SyntaxErrorKind::InvalidName { character: next },
            format!(
                "invalid character `{next}` in name `{}`; names must match \
                 `[_A-Za-z][_A-Za-z0-9]*`",
                &text[..len],
            ),
        ));
    }
    Ok(len)
}
