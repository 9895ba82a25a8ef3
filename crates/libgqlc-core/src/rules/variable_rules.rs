use crate::document::OperationPart;
use crate::document::PartId;
use crate::document::PartKind;
use crate::document::QueryDocument;
use crate::document::SuppliedValue;
use crate::document::VariablePart;
use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use crate::rules::walk::visit_with_spreads;

/// Variable declarations and usages of one operation, including usages
/// inside the fragments it spreads. Messages carry the number of the
/// specific check that failed.
pub const OPERATION_VARIABLES: PartRule = PartRule {
    rule_number: "5.8",
    anchor: anchors::VALIDATION_VARIABLES,
    applies: is_operation,
    execute: check_operation_variables,
};

fn is_operation(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_operation().is_some()
}

fn check_operation_variables(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(operation) = ctx.part.as_operation() else {
        return;
    };
    check_variable_uniqueness(ctx.document, operation, messages);
    check_variable_types(ctx, operation, messages);
    check_variable_usages(ctx.document, ctx.id, operation, messages);
    check_variables_used(ctx.document, operation, messages);
}

fn variables<'a>(
    document: &'a QueryDocument<'_>,
    operation: &'a OperationPart,
) -> impl Iterator<Item = (PartId, &'a VariablePart)> + 'a {
    operation
        .variables()
        .iter()
        .filter_map(|id| document.part(id).as_variable().map(|variable| (id, variable)))
}

fn check_variable_uniqueness(
    document: &QueryDocument<'_>,
    operation: &OperationPart,
    messages: &mut RuleMessages<'_>,
) {
    let mut messages = messages.with_rule("5.8.1", anchors::VARIABLE_UNIQUENESS);
    for (name, entries) in operation.variables().duplicates() {
        for &duplicate in &entries[1..] {
            messages.error(
                format!(
                    "there can be only one variable named `${name}` in {}",
                    operation.describe(),
                ),
                document.part(duplicate).position(),
            );
        }
    }
}

fn check_variable_types(
    ctx: &PartContext<'_, '_>,
    operation: &OperationPart,
    messages: &mut RuleMessages<'_>,
) {
    let mut messages = messages.with_rule("5.8.2", anchors::VARIABLES_ARE_INPUT_TYPES);
    for (id, variable) in variables(ctx.document, operation) {
        let position = ctx.document.part(id).position();
        let Some(type_expression) = variable.type_expression() else {
            messages.error(
                format!(
                    "variable `${}` has an invalid type `{}`",
                    variable.name(),
                    variable.raw_type(),
                ),
                position,
            );
            continue;
        };
        let type_name = type_expression.innermost_name();
        match ctx.schema.type_by_name(type_name) {
            None => messages.error(
                format!("variable `${}` has unknown type `{type_name}`", variable.name()),
                position,
            ),
            Some(graph_type) if !graph_type.is_input_kind() => messages.error(
                format!(
                    "variable `${}` cannot be of {} type `{type_name}`; variables must be input types",
                    variable.name(),
                    graph_type.kind(),
                ),
                position,
            ),
            Some(_) => (),
        }
    }
}

/// Every `$name` reached from the operation must be declared by it and
/// must be usable where it appears. Declared variables that are reached
/// are marked referenced.
fn check_variable_usages(
    document: &QueryDocument<'_>,
    operation_id: PartId,
    operation: &OperationPart,
    messages: &mut RuleMessages<'_>,
) {
    visit_with_spreads(document, operation_id, |_, part| {
        let PartKind::SuppliedValue(usage) = part.kind() else {
            return;
        };
        let SuppliedValue::VariableRef(name) = usage.value() else {
            return;
        };
        let Some(variable) = operation
            .variables()
            .get(name)
            .and_then(|id| document.part(id).as_variable())
        else {
            messages.with_rule("5.8.3", anchors::ALL_VARIABLE_USES_DEFINED).error(
                format!("variable `${name}` must be declared by {}", operation.describe()),
                part.position(),
            );
            return;
        };
        variable.mark_referenced();

        let (Some(variable_type), Some(location_type)) =
            (variable.type_expression(), usage.expected_type())
        else {
            return;
        };
        let has_default = variable.default_value().is_some_and(|default| {
            document
                .part(default)
                .as_value()
                .is_some_and(|value| *value.value() != SuppliedValue::Null)
        });
        if !variable_type.is_usable_as(location_type, has_default, usage.location_has_default()) {
            messages.with_rule("5.8.5", anchors::ALL_VARIABLE_USAGES_ARE_ALLOWED).error(
                format!(
                    "variable `${name}` of type `{variable_type}` cannot be used where \
                     `{location_type}` is expected",
                ),
                part.position(),
            );
        }
    });
}

fn check_variables_used(
    document: &QueryDocument<'_>,
    operation: &OperationPart,
    messages: &mut RuleMessages<'_>,
) {
    let mut messages = messages.with_rule("5.8.4", anchors::ALL_VARIABLES_USED);
    for (id, variable) in variables(document, operation) {
        // Usages bind to the first declaration of a name.
        let is_first = operation.variables().get(variable.name()) == Some(id);
        if is_first && !variable.is_referenced() {
            messages.error(
                format!(
                    "variable `${}` is declared by {} but must be used",
                    variable.name(),
                    operation.describe(),
                ),
                document.part(id).position(),
            );
        }
    }
}
