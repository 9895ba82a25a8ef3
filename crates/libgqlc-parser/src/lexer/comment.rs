/// Scans a `#` comment, returning its byte length (line terminator
/// excluded).
pub(super) fn scan_comment(text: &str) -> usize {
    memchr::memchr2(b'\n', b'\r', text.as_bytes()).unwrap_or(text.len())
}
