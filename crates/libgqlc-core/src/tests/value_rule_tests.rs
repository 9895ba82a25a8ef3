use crate::tests::utils::assert_valid;
use crate::tests::utils::compile;
use crate::tests::utils::rule_numbers;
use crate::tests::utils::single_error;
use crate::tests::utils::test_schema;

// =============================================================================
// Literal kinds
// =============================================================================

#[test]
fn built_in_scalars_accept_their_literals() {
    let schema = test_schema();
    assert_valid(&schema, r#"{ echo(value: "text") }"#);
    assert_valid(&schema, "{ echo(size: 1.5) }");
    assert_valid(&schema, "{ echo(size: 2) }");
    assert_valid(&schema, r#"{ user(id: "abc") { id } }"#);
    assert_valid(&schema, "{ user(id: 7) { id } }");
    assert_valid(&schema, "{ version @skip(if: true) }");
}

#[test]
fn string_argument_rejects_int() {
    let schema = test_schema();
    let message = single_error(&schema, "{ echo(value: 1) }", "5.6.1");
    assert_eq!(message, "value `1` cannot be supplied where `String` is expected");
}

#[test]
fn id_rejects_float_and_int_rejects_float() {
    let schema = test_schema();
    single_error(&schema, "{ user(id: 1.5) { id } }", "5.6.1");
    single_error(&schema, "{ users(first: 1.5) { id } }", "5.6.1");
}

#[test]
fn custom_scalars_accept_any_literal() {
    let schema = test_schema();
    assert_valid(&schema, r#"{ echo(at: "2024-01-01") }"#);
    assert_valid(&schema, "{ echo(at: 1704067200) }");
}

#[test]
fn enum_values_must_exist() {
    let schema = test_schema();
    assert_valid(&schema, "{ echo(color: GREEN) }");
    let message = single_error(&schema, "{ echo(color: PURPLE) }", "5.6.1");
    assert_eq!(message, "value `PURPLE` cannot be supplied where `Color` is expected");
    single_error(&schema, r#"{ echo(color: "RED") }"#, "5.6.1");
}

#[test]
fn null_is_rejected_for_non_null_types() {
    let schema = test_schema();
    assert_valid(&schema, "{ echo(value: null) }");
    let message = single_error(&schema, "{ user(id: null) { id } }", "5.6.1");
    assert_eq!(message, "value `null` cannot be supplied where `ID!` is expected");
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn list_items_are_checked_against_the_item_type() {
    let schema = test_schema();
    assert_valid(&schema, "{ echo(values: [1, 2, 3]) }");
    assert_valid(&schema, "{ echo(values: 1) }");
    let message = single_error(&schema, "{ echo(values: [1, null]) }", "5.6.1");
    assert_eq!(message, "value `null` cannot be supplied where `Int!` is expected");
    single_error(&schema, r#"{ echo(values: [1, "two"]) }"#, "5.6.1");
}

#[test]
fn list_is_rejected_for_non_list_types() {
    let schema = test_schema();
    let message = single_error(&schema, "{ echo(size: [1]) }", "5.6.1");
    assert_eq!(message, "value `[...]` cannot be supplied where `Float` is expected");
}

// =============================================================================
// Input objects
// =============================================================================

#[test]
fn complete_input_object_is_valid() {
    let schema = test_schema();
    assert_valid(
        &schema,
        r#"{ users(filter: { required: true, color: RED, nested: { required: false } }) { id } }"#,
    );
}

#[test]
fn input_object_requires_a_complex_value() {
    let schema = test_schema();
    let message = single_error(&schema, "{ users(filter: 3) { id } }", "5.6.1");
    assert_eq!(message, "value `3` cannot be supplied where `UserFilter` is expected");
}

#[test]
fn unknown_input_field() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ users(filter: { required: true, bogus: 1 }) { id } }",
        "5.6.2",
    );
    assert_eq!(message, "input object `UserFilter` has no field `bogus`");
}

#[test]
fn duplicate_input_field() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ users(filter: { required: true, required: false }) { id } }",
        "5.6.3",
    );
    assert_eq!(message, "input field `required` is supplied more than once");
}

#[test]
fn missing_required_input_field() {
    let schema = test_schema();
    let message = single_error(&schema, r#"{ users(filter: { name: "x" }) { id } }"#, "5.6.4");
    assert_eq!(message, "input object `UserFilter` requires field `required` of type `Boolean!`");
}

#[test]
fn nested_input_objects_are_checked() {
    let schema = test_schema();
    let outcome = compile(
        &schema,
        "{ users(filter: { required: true, nested: { color: BLACK } }) { id } }",
    );
    assert_eq!(rule_numbers(&outcome), vec!["5.6.4", "5.6.1"]);
}

#[test]
fn input_field_values_are_checked() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        r#"{ users(filter: { required: "yes" }) { id } }"#,
        "5.6.1",
    );
    assert!(message.ends_with("cannot be supplied where `Boolean!` is expected"), "{message}");
}
