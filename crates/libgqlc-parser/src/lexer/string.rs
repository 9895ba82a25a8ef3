use crate::ErrorNote;
use crate::SyntaxErrorKind;
use crate::lexer::LexFailure;
use crate::lexer::describe_char_at;

const BLOCK_DELIMITER: &str = "\"\"\"";

fn unterminated(text: &str, found_at: usize, delimiter: &'static str) -> LexFailure {
    let mut failure = LexFailure::new(
        0,
        delimiter.len(),
        SyntaxErrorKind::UnterminatedString { expected: delimiter },
        format!(
            "unterminated string: expected closing `{delimiter}`, received {}",
            describe_char_at(text, found_at),
        ),
    );
    failure.notes.push(ErrorNote::help(format!(
        "add `{delimiter}` to close the string opened here",
    )));
    failure
}

fn invalid_escape(backslash_at: usize, sequence: String) -> LexFailure {
    LexFailure::new(
        backslash_at,
        sequence.len(),
        SyntaxErrorKind::InvalidEscapeSequence {
            sequence: sequence.clone(),
        },
        format!("invalid escape sequence `{sequence}` in string"),
    )
}

/// Scans a normal (`"..."`) or block (`"""..."""`) string at the start of
/// `text`, returning its byte length including both delimiters.
pub(super) fn scan_string(text: &str) -> Result<usize, LexFailure> {
    if text.starts_with(BLOCK_DELIMITER) {
        scan_block_string(text)
    } else {
        scan_normal_string(text)
    }
}

fn scan_block_string(text: &str) -> Result<usize, LexFailure> {
    let bytes = text.as_bytes();
    let mut pos = BLOCK_DELIMITER.len();
    while pos < bytes.len() {
        let rest = &bytes[pos..];
        if rest.starts_with(b"\\\"\"\"") {
            pos += 4;
        } else if rest.starts_with(BLOCK_DELIMITER.as_bytes()) {
            return Ok(pos + BLOCK_DELIMITER.len());
        } else {
            pos += 1;
        }
    }
    Err(unterminated(text, text.len(), BLOCK_DELIMITER))
}

fn scan_unicode_escape(text: &str, backslash_at: usize) -> Result<usize, LexFailure> {
    let after_u = backslash_at + 2;
    let rest = &text[after_u..];
    if let Some(braced) = rest.strip_prefix('{') {
        let hex_len = braced.bytes().take_while(u8::is_ascii_hexdigit).count();
        let valid = hex_len > 0
            && braced.as_bytes().get(hex_len) == Some(&b'}')
            && u32::from_str_radix(&braced[..hex_len], 16)
                .ok()
                .and_then(char::from_u32)
                .is_some();
        if !valid {
            let closed = braced.as_bytes().get(hex_len) == Some(&b'}');
            let seq_end = after_u + 1 + hex_len + usize::from(closed);
            return Err(invalid_escape(
                backslash_at,
                text[backslash_at..seq_end].to_string(),
            ));
        }
        return Ok(after_u + 1 + hex_len + 1);
    }

    let hex_len = rest.bytes().take(4).take_while(u8::is_ascii_hexdigit).count();
    if hex_len < 4 {
        return Err(invalid_escape(
            backslash_at,
            text[backslash_at..after_u + hex_len].to_string(),
        ));
    }
    Ok(after_u + 4)
}

fn scan_normal_string(text: &str) -> Result<usize, LexFailure> {
    let mut chars = text.char_indices().skip(1).peekable();
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok(idx + 1),
            '\n' | '\r' => return Err(unterminated(text, idx, "\"")),
            '\\' => match chars.peek().map(|(_, next)| *next) {
                Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                    chars.next();
                },
                Some('u') => {
                    let resume_at = scan_unicode_escape(text, idx)?;
                    while chars.peek().is_some_and(|(i, _)| *i < resume_at) {
                        chars.next();
                    }
                },
                Some(other) => {
                    return Err(invalid_escape(idx, format!("\\{other}")));
                },
                None => {
                    let mut failure = invalid_escape(idx, "\\".to_string());
                    failure.message =
                        "string cannot end with an unescaped trailing backslash".to_string();
                    return Err(failure);
                },
            },
            _ => {},
        }
    }
    Err(unterminated(text, text.len(), "\""))
}
