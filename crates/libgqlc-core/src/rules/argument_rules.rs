use crate::document::PartKind;
use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use crate::schema::ArgumentDefinition;
use indexmap::IndexMap;
use std::collections::HashSet;

pub const ARGUMENT_NAMES: PartRule = PartRule {
    rule_number: "5.4.1",
    anchor: anchors::ARGUMENT_NAMES,
    applies: is_undefined_argument,
    execute: check_argument_name,
};

pub const ARGUMENT_UNIQUENESS: PartRule = PartRule {
    rule_number: "5.4.2",
    anchor: anchors::ARGUMENT_UNIQUENESS,
    applies: takes_arguments,
    execute: check_argument_uniqueness,
};

pub const REQUIRED_ARGUMENTS: PartRule = PartRule {
    rule_number: "5.4.2.1",
    anchor: anchors::REQUIRED_ARGUMENTS,
    applies: takes_arguments,
    execute: check_required_arguments,
};

fn is_undefined_argument(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_argument().is_some_and(|argument| !argument.is_defined())
}

/// Field selections and directives; fields of complex values are checked
/// by the input object rules.
fn takes_arguments(ctx: &PartContext<'_, '_>) -> bool {
    matches!(
        ctx.part.kind(),
        PartKind::FieldSelection(_) | PartKind::Directive(_)
    )
}

fn check_argument_name(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(argument) = ctx.part.as_argument() else {
        return;
    };
    let owner = match ctx.parent().map(|parent| parent.kind()) {
        Some(PartKind::FieldSelection(selection)) => format!(
            "field `{}.{}`",
            selection.parent_type(),
            selection.field().name(),
        ),
        // Unknown directives are reported on their own.
        Some(PartKind::Directive(directive)) if directive.definition().is_some() => {
            format!("directive `@{}`", directive.name())
        },
        _ => return,
    };
    messages.error(
        format!("unknown argument `{}` on {owner}", argument.name()),
        ctx.position(),
    );
}

fn check_argument_uniqueness(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let mut seen = HashSet::new();
    for &child in ctx.part.children() {
        let part = ctx.document.part(child);
        let Some(argument) = part.as_argument() else {
            continue;
        };
        if !seen.insert(argument.name()) {
            messages.error(
                format!("argument `{}` is supplied more than once", argument.name()),
                part.position(),
            );
        }
    }
}

fn check_required_arguments(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let (owner, definitions): (String, &IndexMap<String, ArgumentDefinition>) =
        match ctx.part.kind() {
            PartKind::FieldSelection(selection) => (
                format!("field `{}`", selection.field().name()),
                selection.field().arguments(),
            ),
            PartKind::Directive(directive) => match directive.definition() {
                Some(definition) => (
                    format!("directive `@{}`", directive.name()),
                    definition.arguments(),
                ),
                None => return,
            },
            _ => return,
        };

    let supplied: HashSet<&str> = ctx
        .part
        .children()
        .iter()
        .filter_map(|&child| ctx.document.part(child).as_argument())
        .map(|argument| argument.name())
        .collect();
    for definition in definitions.values() {
        if definition.is_required() && !supplied.contains(definition.name()) {
            messages.error(
                format!(
                    "{owner} requires argument `{}` of type `{}`",
                    definition.name(),
                    definition.type_expression(),
                ),
                ctx.position(),
            );
        }
    }
}
