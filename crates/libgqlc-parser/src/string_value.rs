//! Conversion between string values and their quoted literal forms.

use crate::StringParsingError;
use std::iter::Peekable;
use std::str::Chars;

/// Renders `value` as a quoted, escaped string literal that
/// [`unescape_string`] turns back into `value`.
///
/// Non-ASCII characters are written as-is; control characters use the short
/// escapes where one exists and `\uXXXX` otherwise.
pub fn escape_string(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for c in value.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\u{0008}' => result.push_str("\\b"),
            '\u{000C}' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Parses a raw string literal (quotes included) into its value.
///
/// Normal strings have their escape sequences processed. Block strings
/// (`"""..."""`) have common indentation stripped, leading/trailing blank
/// lines removed, and only `\"""` unescaped.
pub fn unescape_string(raw: &str) -> Result<String, StringParsingError> {
    if raw.starts_with("\"\"\"") {
        unescape_block_string(raw)
    } else {
        unescape_normal_string(raw)
    }
}

fn unescape_normal_string(raw: &str) -> Result<String, StringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(StringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => result.push(unescape_unicode(&mut chars)?),
            Some(other) => {
                return Err(StringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(StringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(result)
}

fn read_fixed_hex(chars: &mut Peekable<Chars>) -> Result<u32, StringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(StringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}{c}"),
                ));
            },
            None => {
                return Err(StringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                ));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| StringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Called after `\u` has been consumed.
fn unescape_unicode(chars: &mut Peekable<Chars>) -> Result<char, StringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(StringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(StringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                StringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"))
            });
    }

    let code_point = read_fixed_hex(chars)?;
    if (0xD800..0xDC00).contains(&code_point) {
        // High surrogate: must be followed by `\u` + low surrogate.
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low = read_fixed_hex(&mut lookahead)?;
            if (0xDC00..0xE000).contains(&low) {
                *chars = lookahead;
                let combined = 0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00);
                if let Some(c) = char::from_u32(combined) {
                    return Ok(c);
                }
            }
        }
    }
    char::from_u32(code_point).ok_or_else(|| {
        StringParsingError::InvalidUnicodeEscape(format!("\\u{code_point:04X}"))
    })
}

fn unescape_block_string(raw: &str) -> Result<String, StringParsingError> {
    if raw.len() < 6 || !raw.ends_with("\"\"\"") {
        return Err(StringParsingError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content.lines().collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i > 0 {
                line.get(common_indent..)
                    .unwrap_or_else(|| line.trim_start_matches([' ', '\t']))
            } else {
                line
            }
        })
        .collect();

    while result_lines.first().is_some_and(|l| l.trim().is_empty()) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| l.trim().is_empty()) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_then_unescape_preserves_non_ascii() {
        for original in ["TestÄString", "Ä", "tab\there \"quoted\" \\ back", "\u{0001}"] {
            let escaped = escape_string(original);
            assert_eq!(unescape_string(&escaped).as_deref(), Ok(original));
        }
    }

    #[test]
    fn unescape_handles_unicode_forms() {
        assert_eq!(unescape_string(r#""\u00C4""#).as_deref(), Ok("Ä"));
        assert_eq!(unescape_string(r#""\u{1F600}""#).as_deref(), Ok("😀"));
        assert_eq!(unescape_string(r#""\uD83D\uDE00""#).as_deref(), Ok("😀"));
    }

    #[test]
    fn unescape_rejects_unknown_escape() {
        assert_eq!(
            unescape_string(r#""\q""#),
            Err(StringParsingError::InvalidEscapeSequence("\\q".to_string())),
        );
    }

    #[test]
    fn block_string_strips_common_indentation() {
        let raw = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
        assert_eq!(
            unescape_string(raw).as_deref(),
            Ok("Hello,\n  World!\n\nYours,\n  GraphQL."),
        );
    }

    #[test]
    fn block_string_keeps_multi_byte_text() {
        assert_eq!(unescape_string("\"\"\"Ä\"\"\"").as_deref(), Ok("Ä"));
        let raw = "\"\"\"\n  größe\n  \u{3000}\n  🦀\n\"\"\"";
        assert_eq!(unescape_string(raw).as_deref(), Ok("größe\n\u{3000}\n🦀"));
    }
}
