use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;

pub const FIELD_REFERENCE_MATCHES_REQUEST: PartRule = PartRule {
    rule_number: "5.3.1",
    anchor: anchors::FIELD_SELECTIONS,
    applies: is_swapped_field,
    execute: check_field_reference,
};

pub const LEAF_FIELD_SELECTIONS: PartRule = PartRule {
    rule_number: "5.3.3",
    anchor: anchors::LEAF_FIELD_SELECTIONS,
    applies: is_field,
    execute: check_leaf_field_selections,
};

fn is_field(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_field().is_some()
}

fn is_swapped_field(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_field().is_some_and(|field| field.is_swapped())
}

fn check_field_reference(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(selection) = ctx.part.as_field() else {
        return;
    };
    let field = selection.field();
    if field.name() != selection.requested_name() {
        messages.error(
            format!(
                "field `{}` was replaced by `{}.{}`, which does not match the requested \
                 field name",
                selection.requested_name(),
                field.parent_type(),
                field.name(),
            ),
            ctx.position(),
        );
    }
}

fn check_leaf_field_selections(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(selection) = ctx.part.as_field() else {
        return;
    };
    let Some(return_type) = ctx.schema.type_by_name(selection.return_type()) else {
        return;
    };
    let type_expression = selection.field().type_expression();
    match (return_type.is_leaf(), selection.selection_set()) {
        (true, Some(_)) => messages.error(
            format!(
                "field `{}` returns {} `{type_expression}` and must not have a selection set",
                selection.requested_name(),
                return_type.kind(),
            ),
            ctx.position(),
        ),
        (false, None) => messages.error(
            format!(
                "field `{}` returns {} `{type_expression}` and must have a selection of \
                 subfields",
                selection.requested_name(),
                return_type.kind(),
            ),
            ctx.position(),
        ),
        _ => (),
    }
}
