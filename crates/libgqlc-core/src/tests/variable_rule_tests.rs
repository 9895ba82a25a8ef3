use crate::tests::utils::assert_valid;
use crate::tests::utils::compile;
use crate::tests::utils::rule_numbers;
use crate::tests::utils::single_error;
use crate::tests::utils::test_schema;

mod declarations {
    use super::*;

    #[test]
    fn declared_and_used_variables_are_valid() {
        let schema = test_schema();
        assert_valid(
            &schema,
            "query Q($id: ID!, $first: Int = 10, $filter: UserFilter) { \
                user(id: $id) { friends(first: $first) { id } } \
                users(filter: $filter) { id } \
            }",
        );
    }

    #[test]
    fn duplicate_variable() {
        let schema = test_schema();
        let message = single_error(
            &schema,
            "query Q($a: ID!, $a: ID!) { user(id: $a) { id } }",
            "5.8.1",
        );
        assert_eq!(message, "there can be only one variable named `$a` in operation `Q`");
    }

    #[test]
    fn variable_of_output_type() {
        let schema = test_schema();
        let outcome = compile(&schema, "query Q($u: User) { version }");
        assert_eq!(rule_numbers(&outcome), vec!["5.8.2", "5.8.4"]);
        assert_eq!(
            outcome.messages.iter().next().map(|m| m.message()),
            Some("variable `$u` cannot be of object type `User`; variables must be input types"),
        );
    }

    #[test]
    fn variable_of_unknown_type() {
        let schema = test_schema();
        let outcome = compile(&schema, "query Q($m: [Missing!]) { echo(value: $m) }");
        assert_eq!(
            outcome.messages.iter().next().map(|m| m.message()),
            Some("variable `$m` has unknown type `Missing`"),
        );
    }

    #[test]
    fn commas_and_comments_inside_the_declared_type_are_ignored() {
        let schema = test_schema();
        assert_valid(&schema, "query Q($v: [Int!,]) { echo(values: $v) }");
        assert_valid(
            &schema,
            "query Q($v: [Int! # each item\n]) { echo(values: $v) }",
        );
    }
}

mod usages {
    use super::*;

    #[test]
    fn unused_variable_must_be_used() {
        let schema = test_schema();
        let message = single_error(&schema, "query Q($id: ID!) { version }", "5.8.4");
        assert_eq!(message, "variable `$id` is declared by operation `Q` but must be used");
    }

    #[test]
    fn undeclared_variable_must_be_declared() {
        let schema = test_schema();
        let message = single_error(&schema, "query Q { user(id: $id) { id } }", "5.8.3");
        assert_eq!(message, "variable `$id` must be declared by operation `Q`");

        let message = single_error(&schema, "{ user(id: $id) { id } }", "5.8.3");
        assert_eq!(message, "variable `$id` must be declared by the anonymous operation");
    }

    #[test]
    fn usage_type_mismatch_quotes_both_types() {
        let schema = test_schema();
        let message = single_error(
            &schema,
            "query Q($id: String) { user(id: $id) { id } }",
            "5.8.5",
        );
        assert_eq!(message, "variable `$id` of type `String` cannot be used where `ID!` is expected");
    }

    #[test]
    fn nullable_variable_with_default_fits_non_null_location() {
        let schema = test_schema();
        assert_valid(&schema, "query Q($id: ID = 1) { user(id: $id) { id } }");
        single_error(&schema, "query Q($id: ID = null) { user(id: $id) { id } }", "5.8.5");
    }

    #[test]
    fn nullable_variable_fits_location_with_default() {
        let schema = test_schema();
        assert_valid(&schema, "query Q($size: Int) { user(id: 1) { avatar(size: $size) } }");
    }

    #[test]
    fn list_item_usages_are_checked() {
        let schema = test_schema();
        assert_valid(&schema, "query Q($n: Int!) { echo(values: [1, $n]) }");
        single_error(&schema, "query Q($n: Int) { echo(values: [1, $n]) }", "5.8.5");
    }

    #[test]
    fn usages_inside_fragments_are_followed() {
        let schema = test_schema();
        assert_valid(
            &schema,
            "query Q($id: ID!) { ...Outer } \
             fragment Outer on Query { ...Inner } \
             fragment Inner on Query { user(id: $id) { id } }",
        );
    }

    #[test]
    fn usage_inside_fragment_is_checked_per_operation() {
        let schema = test_schema();
        let outcome = compile(
            &schema,
            "query A($id: ID!) { ...F } query B { ...F } \
             fragment F on Query { user(id: $id) { id } }",
        );
        assert_eq!(rule_numbers(&outcome), vec!["5.8.3"]);
        assert_eq!(
            outcome.messages.iter().next().map(|m| m.message()),
            Some("variable `$id` must be declared by operation `B`"),
        );
    }

    #[test]
    fn usage_in_input_object_field() {
        let schema = test_schema();
        assert_valid(
            &schema,
            "query Q($c: Color) { users(filter: { required: true, color: $c }) { id } }",
        );
        single_error(
            &schema,
            "query Q($c: String) { users(filter: { required: true, color: $c }) { id } }",
            "5.8.5",
        );
    }
}
