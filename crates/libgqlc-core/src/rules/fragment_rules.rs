use crate::document::PartId;
use crate::document::PartKind;
use crate::document::QueryDocument;
use crate::rules::DocumentContext;
use crate::rules::DocumentRule;
use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use std::collections::HashSet;

pub const FRAGMENT_NAME_UNIQUENESS: DocumentRule = DocumentRule {
    rule_number: "5.5.1.1",
    anchor: anchors::FRAGMENT_NAME_UNIQUENESS,
    execute: check_fragment_name_uniqueness,
};

pub const FRAGMENT_TYPE_EXISTS: PartRule = PartRule {
    rule_number: "5.5.1.2",
    anchor: anchors::FRAGMENT_SPREAD_TYPE_EXISTENCE,
    applies: is_fragment,
    execute: check_fragment_type_exists,
};

pub const FRAGMENTS_ON_COMPOSITE_TYPES: PartRule = PartRule {
    rule_number: "5.5.1.3",
    anchor: anchors::FRAGMENTS_ON_COMPOSITE_TYPES,
    applies: has_type_condition,
    execute: check_fragment_on_composite_type,
};

/// Runs after every spread has been resolved.
pub const FRAGMENTS_MUST_BE_USED: DocumentRule = DocumentRule {
    rule_number: "5.5.1.4",
    anchor: anchors::FRAGMENTS_MUST_BE_USED,
    execute: check_fragments_used,
};

pub const FRAGMENT_SPREAD_TARGET_DEFINED: PartRule = PartRule {
    rule_number: "5.5.2.1",
    anchor: anchors::FRAGMENT_SPREAD_TARGET_DEFINED,
    applies: is_fragment_spread,
    execute: check_fragment_spread_target,
};

pub const FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES: DocumentRule = DocumentRule {
    rule_number: "5.5.2.2",
    anchor: anchors::FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES,
    execute: check_fragment_cycles,
};

pub const FRAGMENT_SPREAD_IS_POSSIBLE: PartRule = PartRule {
    rule_number: "5.5.2.3",
    anchor: anchors::FRAGMENT_SPREAD_IS_POSSIBLE,
    applies: is_spread_or_typed_inline_fragment,
    execute: check_fragment_spread_possible,
};

fn is_fragment(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_fragment().is_some()
}

fn is_fragment_spread(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_fragment_spread().is_some()
}

fn has_type_condition(ctx: &PartContext<'_, '_>) -> bool {
    type_condition(ctx).is_some()
}

fn is_spread_or_typed_inline_fragment(ctx: &PartContext<'_, '_>) -> bool {
    is_fragment_spread(ctx) || has_type_condition(ctx) && ctx.part.as_inline_fragment().is_some()
}

/// The type condition of a fragment definition or typed inline fragment.
fn type_condition<'a>(ctx: &PartContext<'a, '_>) -> Option<&'a str> {
    match ctx.part.kind() {
        PartKind::Fragment(fragment) => Some(fragment.type_condition()),
        PartKind::InlineFragment(inline) => inline.type_condition(),
        _ => None,
    }
}

fn check_fragment_name_uniqueness(ctx: &DocumentContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    for (name, entries) in ctx.document.fragments().duplicates() {
        for &duplicate in &entries[1..] {
            messages.error(
                format!("there can be only one fragment named `{name}`"),
                ctx.document.part(duplicate).position(),
            );
        }
    }
}

fn check_fragment_type_exists(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(fragment) = ctx.part.as_fragment() else {
        return;
    };
    if ctx.schema.type_by_name(fragment.type_condition()).is_none() {
        messages.error(
            format!(
                "fragment `{}` targets unknown type `{}`",
                fragment.name(),
                fragment.type_condition(),
            ),
            ctx.position(),
        );
    }
}

fn check_fragment_on_composite_type(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(type_name) = type_condition(ctx) else {
        return;
    };
    // Unknown types are reported by the type existence rules.
    let Some(graph_type) = ctx.schema.type_by_name(type_name) else {
        return;
    };
    if graph_type.is_composite() {
        return;
    }
    let subject = match ctx.part.as_fragment() {
        Some(fragment) => format!("fragment `{}`", fragment.name()),
        None => "inline fragment".to_string(),
    };
    messages.error(
        format!(
            "{subject} cannot target {} `{type_name}`; fragments must target a composite type",
            graph_type.kind(),
        ),
        ctx.position(),
    );
}

fn check_fragments_used(ctx: &DocumentContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    for id in ctx.document.fragments().iter() {
        let part = ctx.document.part(id);
        let Some(fragment) = part.as_fragment() else {
            continue;
        };
        // Duplicates are reported by the uniqueness rule.
        let is_first = ctx.document.fragments().get(fragment.name()) == Some(id);
        if is_first && !fragment.is_referenced() {
            messages.error(
                format!("fragment `{}` is never used", fragment.name()),
                part.position(),
            );
        }
    }
}

fn check_fragment_spread_target(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(spread) = ctx.part.as_fragment_spread() else {
        return;
    };
    match ctx.document.fragment(spread.name()) {
        Some(fragment) => fragment.mark_referenced(),
        None => messages.error(
            format!("fragment `{}` is not defined", spread.name()),
            ctx.position(),
        ),
    }
}

fn check_fragment_cycles(ctx: &DocumentContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let mut finder = CycleFinder {
        document: ctx.document,
        finished: HashSet::new(),
        reported: HashSet::new(),
        path: vec![],
    };
    for id in ctx.document.fragments().iter() {
        if let Some(fragment) = ctx.document.part(id).as_fragment() {
            finder.visit(fragment.name(), id, messages);
        }
    }
}

struct CycleFinder<'a, 'schema> {
    document: &'a QueryDocument<'schema>,
    finished: HashSet<&'a str>,
    reported: HashSet<&'a str>,
    path: Vec<&'a str>,
}
impl<'a> CycleFinder<'a, '_> {
    fn visit(&mut self, name: &'a str, fragment: PartId, messages: &mut RuleMessages<'_>) {
        if self.finished.contains(name) {
            return;
        }
        self.path.push(name);
        for id in self.document.descendants(fragment) {
            let part = self.document.part(id);
            let Some(spread) = part.as_fragment_spread() else {
                continue;
            };
            let target = spread.name();
            if let Some(start) = self.path.iter().position(|entry| *entry == target) {
                if self.reported.insert(target) {
                    let cycle = self.path[start..].join(" -> ");
                    messages.error(
                        format!("fragment `{target}` spreads itself through {cycle} -> {target}"),
                        part.position(),
                    );
                }
                continue;
            }
            if let Some(target_id) = self.document.fragments().get(target) {
                self.visit(target, target_id, messages);
            }
        }
        self.path.pop();
        self.finished.insert(name);
    }
}

fn check_fragment_spread_possible(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let (subject, parent_type, target_type) = match ctx.part.kind() {
        PartKind::FragmentSpread(spread) => {
            let Some(fragment) = ctx.document.fragment(spread.name()) else {
                return;
            };
            (
                format!("fragment `{}`", spread.name()),
                spread.parent_type(),
                fragment.type_condition(),
            )
        },
        PartKind::InlineFragment(inline) => {
            let Some(type_condition) = inline.type_condition() else {
                return;
            };
            ("inline fragment".to_string(), inline.parent_type(), type_condition)
        },
        _ => return,
    };
    let is_composite = |name: &str| {
        ctx.schema
            .type_by_name(name)
            .is_some_and(|graph_type| graph_type.is_composite())
    };
    if !is_composite(parent_type) || !is_composite(target_type) {
        return;
    }
    if !ctx.schema.types_overlap(parent_type, target_type) {
        messages.error(
            format!("{subject} on `{target_type}` can never apply within `{parent_type}`"),
            ctx.position(),
        );
    }
}
