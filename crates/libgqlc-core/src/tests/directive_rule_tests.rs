use crate::tests::utils::assert_valid;
use crate::tests::utils::single_error;
use crate::tests::utils::test_schema;

#[test]
fn built_in_and_declared_directives_are_valid() {
    let schema = test_schema();
    assert_valid(
        &schema,
        r#"query Q($on: Boolean!) {
            version @include(if: $on) @cached(ttl: 5)
            pet @tag(name: "a") @tag(name: "b") { ... on Dog @skip(if: false) { barks } }
        }"#,
    );
}

#[test]
fn unknown_directive() {
    let schema = test_schema();
    let message = single_error(&schema, "{ version @nope }", "5.7.1");
    assert_eq!(message, "unknown directive `@nope`");
}

#[test]
fn directive_in_wrong_location() {
    let schema = test_schema();
    let message = single_error(&schema, "query Q @cached(ttl: 1) { version }", "5.7.2");
    assert_eq!(message, "directive `@cached` cannot be used at QUERY");
}

#[test]
fn directive_on_fragment_definition_location() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ user(id: 1) { ...F } } fragment F on User @tag(name: \"x\") { id }",
        "5.7.2",
    );
    assert_eq!(message, "directive `@tag` cannot be used at FRAGMENT_DEFINITION");
}

#[test]
fn non_repeatable_directive_used_twice() {
    let schema = test_schema();
    let message = single_error(&schema, "{ version @cached(ttl: 1) @cached(ttl: 2) }", "5.7.3");
    assert_eq!(message, "directive `@cached` can only be used once at this location");
}
