use crate::QueryCompiler;
use crate::tests::utils::assert_valid;
use crate::tests::utils::compile;
use crate::tests::utils::single_error;
use crate::tests::utils::test_schema;

// =============================================================================
// Field existence
// =============================================================================

#[test]
fn unknown_field_is_reported_and_skipped() {
    let schema = test_schema();
    let message = single_error(&schema, "{ nope { deeper(x: 1) } }", "5.3.1");
    assert_eq!(message, "field `nope` does not exist on object `Query`");
}

#[test]
fn unknown_field_on_interface_names_the_interface() {
    let schema = test_schema();
    let message = single_error(&schema, "{ pet { barks } }", "5.3.1");
    assert_eq!(message, "field `barks` does not exist on interface `Pet`");
}

#[test]
fn union_fields_must_be_selected_through_fragments() {
    let schema = test_schema();
    let message = single_error(&schema, r#"{ search(term: "x") { name } }"#, "5.3.1");
    assert_eq!(
        message,
        "fields cannot be selected directly from union `SearchResult`; select `name` within \
         an inline fragment on one of its members",
    );
    assert_valid(&schema, r#"{ search(term: "x") { __typename ... on User { name } } }"#);
}

// =============================================================================
// Field swaps
// =============================================================================

#[test]
fn swapped_field_with_another_name_is_reported() {
    let schema = test_schema();
    let compiler = QueryCompiler::new(&schema);
    let outcome = compiler.compile("{ version }");
    assert!(outcome.is_success());
    let mut document = outcome.document.expect("document is constructed");

    let version_id = document
        .iter()
        .find(|id| document.field_selection(*id).is_some())
        .expect("version is selected");
    let echo = schema.field("Query", "echo").expect("echo exists");
    assert!(document.swap_field(version_id, echo));

    let messages = compiler.validate(&document);
    let rule_numbers: Vec<_> = messages.iter().filter_map(|m| m.rule_number()).collect();
    assert_eq!(rule_numbers, vec!["5.3.1"]);
    assert_eq!(
        messages.iter().next().map(|m| m.message()),
        Some("field `version` was replaced by `Query.echo`, which does not match the requested field name"),
    );
}

#[test]
fn swapped_field_with_the_same_name_is_valid() {
    let schema = test_schema();
    let compiler = QueryCompiler::new(&schema);
    let mut document = compiler
        .compile("{ pet { name } }")
        .document
        .expect("document is constructed");

    let name_id = document
        .iter()
        .find(|id| {
            document
                .field_selection(*id)
                .is_some_and(|field| field.requested_name() == "name")
        })
        .expect("name is selected");
    let dog_name = schema.field("Dog", "name").expect("Dog.name exists");
    assert!(document.swap_field(name_id, dog_name));
    assert!(document.field_selection(name_id).is_some_and(|f| f.is_swapped()));
    assert!(compiler.validate(&document).is_empty());
}

// =============================================================================
// Leaf field selections
// =============================================================================

#[test]
fn leaf_field_must_not_have_selections() {
    let schema = test_schema();
    let message = single_error(&schema, "{ version { length } }", "5.3.3");
    assert_eq!(
        message,
        "field `version` returns scalar `String` and must not have a selection set",
    );
}

#[test]
fn composite_field_must_have_selections() {
    let schema = test_schema();
    let message = single_error(&schema, "{ users }", "5.3.3");
    assert_eq!(
        message,
        "field `users` returns object `[User!]!` and must have a selection of subfields",
    );
}

#[test]
fn typename_needs_no_selections() {
    let schema = test_schema();
    assert_valid(&schema, "{ __typename pet { __typename } }");
}

#[test]
fn unknown_field_does_not_report_leaf_errors() {
    let schema = test_schema();
    let outcome = compile(&schema, "{ missing }");
    assert_eq!(outcome.messages.len(), 1);
}
