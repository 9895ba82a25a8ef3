use crate::tests::utils::assert_valid;
use crate::tests::utils::compile;
use crate::tests::utils::rule_numbers;
use crate::tests::utils::single_error;
use crate::tests::utils::test_schema;

#[test]
fn used_fragments_are_valid() {
    let schema = test_schema();
    assert_valid(
        &schema,
        "{ user(id: 1) { ...UserFields } } \
         fragment UserFields on User { id ...Named } \
         fragment Named on User { name }",
    );
    assert_valid(&schema, "{ pet { ...PetFields } } fragment PetFields on Pet { name }");
}

// =============================================================================
// Fragment definitions
// =============================================================================

#[test]
fn duplicate_fragment_name() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ user(id: 1) { ...F } } fragment F on User { id } fragment F on User { name }",
        "5.5.1.1",
    );
    assert_eq!(message, "there can be only one fragment named `F`");
}

#[test]
fn fragment_on_unknown_type() {
    let schema = test_schema();
    let message = single_error(&schema, "{ ...F } fragment F on Missing { a }", "5.5.1.2");
    assert_eq!(message, "fragment `F` targets unknown type `Missing`");
}

#[test]
fn inline_fragment_on_unknown_type() {
    let schema = test_schema();
    let message = single_error(&schema, "{ pet { ... on Missing { a } } }", "5.5.1.2");
    assert_eq!(message, "inline fragment targets unknown type `Missing`");
}

#[test]
fn fragment_on_leaf_type() {
    let schema = test_schema();
    let message = single_error(&schema, "{ version ...F } fragment F on Color { name }", "5.5.1.3");
    assert_eq!(
        message,
        "fragment `F` cannot target enum `Color`; fragments must target a composite type",
    );
}

#[test]
fn inline_fragment_on_leaf_type() {
    let schema = test_schema();
    let message = single_error(&schema, "{ pet { ... on DateTime { x } } }", "5.5.1.3");
    assert_eq!(
        message,
        "inline fragment cannot target scalar `DateTime`; fragments must target a composite type",
    );
}

#[test]
fn unused_fragment() {
    let schema = test_schema();
    let message = single_error(&schema, "{ version } fragment Unused on User { name }", "5.5.1.4");
    assert_eq!(message, "fragment `Unused` is never used");
}

#[test]
fn fragment_used_only_by_another_fragment_is_used() {
    let schema = test_schema();
    let outcome = compile(
        &schema,
        "{ version } fragment A on User { ...B } fragment B on User { name }",
    );
    // Only `A` is unreferenced.
    assert_eq!(rule_numbers(&outcome), vec!["5.5.1.4"]);
}

// =============================================================================
// Fragment spreads
// =============================================================================

#[test]
fn spread_of_undefined_fragment() {
    let schema = test_schema();
    let message = single_error(&schema, "{ user(id: 1) { ...Missing } }", "5.5.2.1");
    assert_eq!(message, "fragment `Missing` is not defined");
}

#[test]
fn self_spreading_fragment() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ user(id: 1) { ...A } } fragment A on User { name ...A }",
        "5.5.2.2",
    );
    assert_eq!(message, "fragment `A` spreads itself through A -> A");
}

#[test]
fn fragment_cycle_is_reported_once() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ user(id: 1) { ...A } } \
         fragment A on User { friends { ...B } } \
         fragment B on User { id ...A }",
        "5.5.2.2",
    );
    assert_eq!(message, "fragment `A` spreads itself through A -> B -> A");
}

#[test]
fn spread_of_impossible_fragment() {
    let schema = test_schema();
    let message = single_error(
        &schema,
        "{ user(id: 1) { ...DogFields } } fragment DogFields on Dog { barks }",
        "5.5.2.3",
    );
    assert_eq!(message, "fragment `DogFields` on `Dog` can never apply within `User`");
}

#[test]
fn impossible_inline_fragment() {
    let schema = test_schema();
    let message = single_error(&schema, "{ pet { ... on User { id } } }", "5.5.2.3");
    assert_eq!(message, "inline fragment on `User` can never apply within `Pet`");
}

#[test]
fn possible_spreads_across_abstract_types() {
    let schema = test_schema();
    assert_valid(
        &schema,
        r#"{
            node(id: 1) { ... on Dog { barks } ...PetName }
            search(term: "x") { ... on Dog { ...PetName } }
        }
        fragment PetName on Pet { name }"#,
    );
}
