mod construction_tests;
mod directive_rule_tests;
mod field_rule_tests;
mod fragment_rule_tests;
pub(crate) mod utils;
mod value_rule_tests;
mod variable_rule_tests;
