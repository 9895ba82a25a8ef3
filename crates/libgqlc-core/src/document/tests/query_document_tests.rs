use crate::QueryCompiler;
use crate::tests::utils::test_schema;

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn parts_are_visited_in_pre_order() {
    let schema = test_schema();
    let document = QueryCompiler::new(&schema)
        .compile("query Q { user(id: 1) { id name } version }")
        .document
        .expect("document is constructed");

    let kinds: Vec<_> = document
        .iter()
        .map(|id| document.part(id).kind().name())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "Operation",
            "FieldSelectionSet",
            "FieldSelection",
            "InputArgument",
            "SuppliedValue",
            "FieldSelectionSet",
            "FieldSelection",
            "FieldSelection",
            "FieldSelection",
        ],
    );
    assert_eq!(document.iter().count(), document.len());
}

#[test]
fn descendants_include_the_starting_part() {
    let schema = test_schema();
    let document = QueryCompiler::new(&schema)
        .compile("{ version } fragment F on User { id }")
        .document
        .expect("document is constructed");

    let fragment = document.roots()[1];
    let subtree: Vec<_> = document.descendants(fragment).collect();
    assert_eq!(subtree.first(), Some(&fragment));
    assert_eq!(subtree.len(), 3);
    for id in &subtree[1..] {
        let mut ancestor = document.part(*id).parent();
        while let Some(parent) = ancestor.filter(|parent| *parent != fragment) {
            ancestor = document.part(parent).parent();
        }
        assert_eq!(ancestor, Some(fragment));
    }
}

// =============================================================================
// Field swapping
// =============================================================================

#[test]
fn swap_field_rejects_parts_that_are_not_fields() {
    let schema = test_schema();
    let mut document = QueryCompiler::new(&schema)
        .compile("{ version }")
        .document
        .expect("document is constructed");
    let echo = schema.field("Query", "echo").expect("echo exists");

    let operation = document.roots()[0];
    assert!(!document.swap_field(operation, echo));
    assert!(document.part(operation).as_operation().is_some());
}
