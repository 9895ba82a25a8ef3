//! Syntax errors raised by the tree builders.

use crate::ParserOptions;
use crate::SyntaxErrorKind;
use crate::parse_document;
use crate::parse_document_with_options;
use crate::tests::utils::parse_err;

#[test]
fn empty_document_is_rejected() {
    let error = parse_err("   # only a comment\n");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedEof { .. }));
}

#[test]
fn empty_argument_list_is_rejected() {
    let error = parse_err("{ f() }");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::InvalidEmptyConstruct { construct: "()" },
    ));
}

#[test]
fn empty_variable_definitions_are_rejected() {
    let error = parse_err("query Q() { a }");
    assert!(matches!(error.kind(), SyntaxErrorKind::InvalidEmptyConstruct { .. }));
}

#[test]
fn missing_colon_in_argument() {
    let error = parse_err("{ f(a 1) }");
    assert_eq!(error.message(), "expected `:`, received `1`");
    assert_eq!(error.span().start_inclusive.byte_offset(), 6);
}

#[test]
fn unterminated_selection_set() {
    let error = parse_err("query { a { b }");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnterminatedCollection { delimiter: "}" },
    ));
    // Points at the outer, unclosed `{`.
    assert_eq!(error.span().start_inclusive.byte_offset(), 6);
}

#[test]
fn fragment_named_on_is_reserved() {
    let error = parse_err("fragment on on User { id }");
    assert!(matches!(error.kind(), SyntaxErrorKind::ReservedName { name } if name == "on"));
}

#[test]
fn fragment_requires_type_condition() {
    let error = parse_err("fragment F User { id }");
    assert_eq!(error.message(), "expected `on`, received `User`");
}

#[test]
fn variable_defaults_must_be_constant() {
    let error = parse_err("query Q($a: Int = $b, $b: Int) { f(x: $a) }");
    assert_eq!(error.message(), "expected constant value, received `$`");
    assert_eq!(error.span().start_inclusive.byte_offset(), 18);

    let error = parse_err("query Q($a: [Int] = [1, $b]) { f(x: $a) }");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedToken { .. }));

    assert!(parse_document("query Q($a: Int = 1, $b: Int) { f(x: $a, y: [$b]) }").is_ok());
}

#[test]
fn type_system_definition_is_rejected_with_note() {
    let error = parse_err("type Query { a: Int }");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedToken { .. }));
    assert_eq!(error.notes().len(), 1);
}

#[test]
fn lexer_errors_propagate() {
    let error = parse_err("{ f(a: 1..2) }");
    assert!(matches!(error.kind(), SyntaxErrorKind::InvalidNumber { .. }));
    assert_eq!(error.span().start_inclusive.byte_offset(), 9);
}

#[test]
fn unexpected_eof_in_field_arguments() {
    let error = parse_err("{ f(a: ");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedEof { .. }));
}

#[test]
fn nesting_beyond_max_depth_is_rejected() {
    let options = ParserOptions { max_depth: 3 };
    assert!(parse_document_with_options("{ a { b { c } } }", &options).is_ok());
    let error = parse_document_with_options("{ a { b { c { d } } } }", &options).unwrap_err();
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::MaxDepthExceeded { max_depth: 3 },
    ));

    let error = parse_document_with_options("{ f(a: [[[[1]]]]) }", &options).unwrap_err();
    assert!(matches!(error.kind(), SyntaxErrorKind::MaxDepthExceeded { .. }));
}

#[test]
fn deeply_nested_lists_do_not_overflow_the_stack() {
    let source = format!("{{ f(a: {}1{}) }}", "[".repeat(10_000), "]".repeat(10_000));
    let error = parse_err(&source);
    assert!(matches!(error.kind(), SyntaxErrorKind::MaxDepthExceeded { max_depth: 256 }));
}

#[test]
fn nesting_at_the_default_limit_parses() {
    // The enclosing selection set takes one level.
    let depth = ParserOptions::DEFAULT_MAX_DEPTH - 1;
    let lists = format!("{{ f(a: {}1{}) }}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_document(&lists).is_ok());

    let objects = format!("{{ f(a: {}1{}) }}", "{ x: ".repeat(depth), " }".repeat(depth));
    assert!(parse_document(&objects).is_ok());

    let too_deep = format!("{{ f(a: {}1{}) }}", "[".repeat(depth + 1), "]".repeat(depth + 1));
    let error = parse_err(&too_deep);
    assert!(matches!(error.kind(), SyntaxErrorKind::MaxDepthExceeded { max_depth: 256 }));
}

#[test]
fn selection_sets_at_the_default_limit_parse() {
    let depth = ParserOptions::DEFAULT_MAX_DEPTH;
    let source = format!("{}x{}", "{ f ".repeat(depth - 1) + "{ ", " }".repeat(depth));
    assert!(parse_document(&source).is_ok());
}

#[test]
fn syntax_errors_stay_pointer_sized() {
    assert!(
        std::mem::size_of::<Result<(), crate::SyntaxError>>()
            <= 2 * std::mem::size_of::<usize>(),
    );
}
