use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use std::collections::HashSet;

pub const DIRECTIVES_ARE_DEFINED: PartRule = PartRule {
    rule_number: "5.7.1",
    anchor: anchors::DIRECTIVES_ARE_DEFINED,
    applies: is_directive,
    execute: check_directive_defined,
};

pub const DIRECTIVES_ARE_IN_VALID_LOCATIONS: PartRule = PartRule {
    rule_number: "5.7.2",
    anchor: anchors::DIRECTIVES_ARE_IN_VALID_LOCATIONS,
    applies: is_directive,
    execute: check_directive_location,
};

/// Checked on the part the directives are attached to.
pub const DIRECTIVES_ARE_UNIQUE_PER_LOCATION: PartRule = PartRule {
    rule_number: "5.7.3",
    anchor: anchors::DIRECTIVES_ARE_UNIQUE_PER_LOCATION,
    applies: has_directives,
    execute: check_directive_uniqueness,
};

fn is_directive(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_directive().is_some()
}

fn has_directives(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part
        .children()
        .iter()
        .any(|&child| ctx.document.part(child).as_directive().is_some())
}

fn check_directive_defined(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(directive) = ctx.part.as_directive() else {
        return;
    };
    if directive.definition().is_none() {
        messages.error(
            format!("unknown directive `@{}`", directive.name()),
            ctx.position(),
        );
    }
}

fn check_directive_location(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(directive) = ctx.part.as_directive() else {
        return;
    };
    let Some(definition) = directive.definition() else {
        return;
    };
    if !definition.is_valid_at(directive.location()) {
        messages.error(
            format!(
                "directive `@{}` cannot be used at {}",
                directive.name(),
                directive.location(),
            ),
            ctx.position(),
        );
    }
}

fn check_directive_uniqueness(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let mut seen = HashSet::new();
    for &child in ctx.part.children() {
        let part = ctx.document.part(child);
        let Some(directive) = part.as_directive() else {
            continue;
        };
        let repeatable = directive
            .definition()
            .is_some_and(|definition| definition.is_repeatable());
        if !repeatable && !seen.insert(directive.name()) {
            messages.error(
                format!(
                    "directive `@{}` can only be used once at this location",
                    directive.name(),
                ),
                part.position(),
            );
        }
    }
}
