use crate::SyntaxErrorKind;
use crate::syntax::ScalarValueKind;
use crate::syntax::SyntaxNodeKind;
use crate::tests::utils::child_kinds;
use crate::tests::utils::nth_child;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;

#[test]
fn value_dispatch_by_token() {
    let source = r#"{ f(i: 1, f: 1.5, s: "s", b: true, e: RED, n: null, v: $v, l: [1], c: {a: 1}) }"#;
    let tree = parse_ok(source);
    let operation = nth_child(&tree, tree.root(), 0);
    let field = nth_child(&tree, nth_child(&tree, operation, 0), 0);
    let arguments = nth_child(&tree, field, 0);
    let value_kinds: Vec<_> = tree
        .children(arguments)
        .map(|item| tree.node(nth_child(&tree, item, 0)).kind)
        .collect();
    assert_eq!(
        value_kinds,
        vec![
            SyntaxNodeKind::ScalarValue(ScalarValueKind::Int),
            SyntaxNodeKind::ScalarValue(ScalarValueKind::Float),
            SyntaxNodeKind::ScalarValue(ScalarValueKind::String),
            SyntaxNodeKind::ScalarValue(ScalarValueKind::Boolean),
            SyntaxNodeKind::EnumValue,
            SyntaxNodeKind::NullValue,
            SyntaxNodeKind::VariableValue,
            SyntaxNodeKind::ListValue,
            SyntaxNodeKind::ComplexValue,
        ],
    );
}

#[test]
fn nested_list_and_complex_values() {
    let tree = parse_ok("{ f(a: [[1, 2], {b: [true]}, []]) }");
    let operation = nth_child(&tree, tree.root(), 0);
    let field = nth_child(&tree, nth_child(&tree, operation, 0), 0);
    let item = nth_child(&tree, nth_child(&tree, field, 0), 0);
    let list = nth_child(&tree, item, 0);
    assert_eq!(
        child_kinds(&tree, list),
        vec![
            SyntaxNodeKind::ListValue,
            SyntaxNodeKind::ComplexValue,
            SyntaxNodeKind::ListValue,
        ],
    );
    let complex = nth_child(&tree, list, 1);
    let b = tree.node(nth_child(&tree, complex, 0));
    assert_eq!(b.kind, SyntaxNodeKind::InputItem);
    assert_eq!(b.name, Some("b"));
}

#[test]
fn unrecognized_value_token_expects_value() {
    let error = parse_err("{ f(a: :) }");
    assert_eq!(error.message(), "expected <value>, received `:`");
}

#[test]
fn unterminated_list_value() {
    let error = parse_err("{ f(a: [1, 2");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnterminatedCollection { delimiter: "]" },
    ));
    assert_eq!(error.span().start_inclusive.byte_offset(), 7);
}

#[test]
fn unterminated_complex_value() {
    let error = parse_err("{ f(a: {b: 1");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnterminatedCollection { delimiter: "}" },
    ));
}
