use crate::SourcePosition;
use crate::SourceSpan;

#[test]
fn advanced_over_counts_crlf_once() {
    let start = SourcePosition::new(0, 0, 0);
    let end = start.advanced_over("ab\r\ncd\nÄ");
    assert_eq!(end.line(), 2);
    assert_eq!(end.column(), 1);
    assert_eq!(end.byte_offset(), 9);
}

#[test]
fn display_is_one_based() {
    let position = SourcePosition::new(4, 11, 60);
    assert_eq!(position.to_string(), "5:12");
    assert_eq!(position.display_line(), 5);
    assert_eq!(position.display_column(), 12);
}

#[test]
fn span_slices_source() {
    let source = "query { hero }";
    let start = SourcePosition::new(0, 8, 8);
    let span = SourceSpan::new(start, start.advanced_over("hero"));
    assert_eq!(span.slice(source), Some("hero"));
    assert_eq!(SourceSpan::at(start).slice(source), Some(""));
}
