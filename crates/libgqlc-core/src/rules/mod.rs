//! Numbered validation rules.
//!
//! Each rule is a plain value: the number of the requirement it enforces, a
//! link into the GraphQL specification, an applicability predicate and an
//! execution function. Rules only communicate through the message
//! collection and the "referenced" flags of fragments and variables.

pub mod anchors;
mod argument_rules;
mod construction_rules;
mod directive_rules;
mod document_validator;
mod field_merging;
mod field_rules;
mod fragment_rules;
mod operation_rules;
mod rule;
mod value_rules;
mod variable_rules;
mod walk;

pub use document_validator::DocumentValidator;
pub use rule::ConstructionRule;
pub use rule::DocumentContext;
pub use rule::DocumentRule;
pub use rule::PartContext;
pub use rule::PartRule;
pub use rule::RuleMessages;

/// Run against each syntax node before it is bound. A failing rule skips
/// the node's subtree.
pub static CONSTRUCTION_RULES: &[ConstructionRule] = &[
    construction_rules::OPERATION_ROOT_TYPE_EXISTS,
    construction_rules::FIELD_EXISTS,
    construction_rules::INLINE_FRAGMENT_TYPE_EXISTS,
];

/// Run once against the whole document, before any part rule.
pub static DOCUMENT_RULES: &[DocumentRule] = &[
    operation_rules::OPERATION_NAME_UNIQUENESS,
    operation_rules::LONE_ANONYMOUS_OPERATION,
    fragment_rules::FRAGMENT_NAME_UNIQUENESS,
    fragment_rules::FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES,
];

/// Run against every part, in pre-order.
pub static PART_RULES: &[PartRule] = &[
    operation_rules::SUBSCRIPTION_SINGLE_ROOT_FIELD,
    operation_rules::OPERATION_SELECTS_FIELDS,
    field_rules::FIELD_REFERENCE_MATCHES_REQUEST,
    field_merging::FIELD_SELECTION_MERGING,
    field_rules::LEAF_FIELD_SELECTIONS,
    argument_rules::ARGUMENT_NAMES,
    argument_rules::ARGUMENT_UNIQUENESS,
    argument_rules::REQUIRED_ARGUMENTS,
    fragment_rules::FRAGMENT_TYPE_EXISTS,
    fragment_rules::FRAGMENTS_ON_COMPOSITE_TYPES,
    fragment_rules::FRAGMENT_SPREAD_TARGET_DEFINED,
    fragment_rules::FRAGMENT_SPREAD_IS_POSSIBLE,
    value_rules::VALUES_OF_CORRECT_TYPE,
    value_rules::INPUT_OBJECT_FIELD_NAMES,
    value_rules::INPUT_OBJECT_FIELD_UNIQUENESS,
    value_rules::INPUT_OBJECT_REQUIRED_FIELDS,
    directive_rules::DIRECTIVES_ARE_DEFINED,
    directive_rules::DIRECTIVES_ARE_IN_VALID_LOCATIONS,
    directive_rules::DIRECTIVES_ARE_UNIQUE_PER_LOCATION,
    variable_rules::OPERATION_VARIABLES,
];

/// Run once after every part rule, for checks that depend on flags the
/// part rules set.
pub static COMPLETION_RULES: &[DocumentRule] = &[fragment_rules::FRAGMENTS_MUST_BE_USED];
