//! Links into the October 2021 edition of the GraphQL specification.

macro_rules! anchor {
    ($name:ident, $fragment:literal) => {
        pub const $name: &str = concat!("https://spec.graphql.org/October2021/", $fragment);
    };
}

anchor!(ROOT_OPERATION_TYPES, "#sec-Root-Operation-Types");
anchor!(OPERATION_NAME_UNIQUENESS, "#sec-Operation-Name-Uniqueness");
anchor!(LONE_ANONYMOUS_OPERATION, "#sec-Lone-Anonymous-Operation");
anchor!(SINGLE_ROOT_FIELD, "#sec-Single-root-field");
anchor!(FIELD_SELECTIONS, "#sec-Field-Selections");
anchor!(FIELD_SELECTION_MERGING, "#sec-Field-Selection-Merging");
anchor!(LEAF_FIELD_SELECTIONS, "#sec-Leaf-Field-Selections");
anchor!(ARGUMENT_NAMES, "#sec-Argument-Names");
anchor!(ARGUMENT_UNIQUENESS, "#sec-Argument-Uniqueness");
anchor!(REQUIRED_ARGUMENTS, "#sec-Required-Arguments");
anchor!(FRAGMENT_NAME_UNIQUENESS, "#sec-Fragment-Name-Uniqueness");
anchor!(FRAGMENT_SPREAD_TYPE_EXISTENCE, "#sec-Fragment-Spread-Type-Existence");
anchor!(FRAGMENTS_ON_COMPOSITE_TYPES, "#sec-Fragments-On-Composite-Types");
anchor!(FRAGMENTS_MUST_BE_USED, "#sec-Fragments-Must-Be-Used");
anchor!(FRAGMENT_SPREAD_TARGET_DEFINED, "#sec-Fragment-spread-target-defined");
anchor!(FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES, "#sec-Fragment-spreads-must-not-form-cycles");
anchor!(FRAGMENT_SPREAD_IS_POSSIBLE, "#sec-Fragment-spread-is-possible");
anchor!(VALUES_OF_CORRECT_TYPE, "#sec-Values-of-Correct-Type");
anchor!(INPUT_OBJECT_FIELD_NAMES, "#sec-Input-Object-Field-Names");
anchor!(INPUT_OBJECT_FIELD_UNIQUENESS, "#sec-Input-Object-Field-Uniqueness");
anchor!(INPUT_OBJECT_REQUIRED_FIELDS, "#sec-Input-Object-Required-Fields");
anchor!(DIRECTIVES_ARE_DEFINED, "#sec-Directives-Are-Defined");
anchor!(DIRECTIVES_ARE_IN_VALID_LOCATIONS, "#sec-Directives-Are-In-Valid-Locations");
anchor!(DIRECTIVES_ARE_UNIQUE_PER_LOCATION, "#sec-Directives-Are-Unique-Per-Location");
anchor!(VALIDATION_VARIABLES, "#sec-Validation.Variables");
anchor!(VARIABLE_UNIQUENESS, "#sec-Variable-Uniqueness");
anchor!(VARIABLES_ARE_INPUT_TYPES, "#sec-Variables-Are-Input-Types");
anchor!(ALL_VARIABLE_USES_DEFINED, "#sec-All-Variable-Uses-Defined");
anchor!(ALL_VARIABLES_USED, "#sec-All-Variables-Used");
anchor!(ALL_VARIABLE_USAGES_ARE_ALLOWED, "#sec-All-Variable-Usages-are-Allowed");
