use crate::document::PartId;
use crate::document::QueryDocument;
use crate::rules::DocumentContext;
use crate::rules::DocumentRule;
use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use crate::rules::walk::collect_fields;
use crate::schema::OperationKind;
use indexmap::IndexMap;

pub const OPERATION_NAME_UNIQUENESS: DocumentRule = DocumentRule {
    rule_number: "5.2.1.1",
    anchor: anchors::OPERATION_NAME_UNIQUENESS,
    execute: check_operation_name_uniqueness,
};

pub const LONE_ANONYMOUS_OPERATION: DocumentRule = DocumentRule {
    rule_number: "5.2.2.1",
    anchor: anchors::LONE_ANONYMOUS_OPERATION,
    execute: check_lone_anonymous_operation,
};

pub const SUBSCRIPTION_SINGLE_ROOT_FIELD: PartRule = PartRule {
    rule_number: "5.2.3.1",
    anchor: anchors::SINGLE_ROOT_FIELD,
    applies: is_subscription,
    execute: check_subscription_single_root_field,
};

pub const OPERATION_SELECTS_FIELDS: PartRule = PartRule {
    rule_number: "5.3.3",
    anchor: anchors::LEAF_FIELD_SELECTIONS,
    applies: is_operation,
    execute: check_operation_selects_fields,
};

fn check_operation_name_uniqueness(ctx: &DocumentContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    for (name, entries) in ctx.document.operations().duplicates() {
        for &duplicate in &entries[1..] {
            messages.error(
                format!("there can be only one operation named `{name}`"),
                ctx.document.part(duplicate).position(),
            );
        }
    }
}

fn check_lone_anonymous_operation(ctx: &DocumentContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let operations = ctx.document.operations();
    if operations.len() < 2 {
        return;
    }
    for &anonymous in operations.anonymous() {
        messages.error(
            "an anonymous operation must be the only operation in its document",
            ctx.document.part(anonymous).position(),
        );
    }
}

fn is_operation(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_operation().is_some()
}

/// An operation written with `{}` has no selection set part at all.
fn check_operation_selects_fields(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(operation) = ctx.part.as_operation() else {
        return;
    };
    if operation.selection_set().is_some() {
        return;
    }
    let subject = match operation.name() {
        Some(name) => format!("operation `{name}`"),
        None => "the anonymous operation".to_string(),
    };
    messages.error(
        format!(
            "{subject} must select at least one field of root type `{}`",
            operation.root_type(),
        ),
        ctx.position(),
    );
}

fn is_subscription(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part
        .as_operation()
        .is_some_and(|op| op.kind() == OperationKind::Subscription)
}

/// Follows virtual fields down from the root selection set; every level
/// must select exactly one field.
fn check_subscription_single_root_field(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(operation) = ctx.part.as_operation() else {
        return;
    };
    let Some(mut selection_set) = operation.selection_set() else {
        return;
    };

    let mut path: Vec<&str> = vec![];
    loop {
        let fields = distinct_fields(ctx.document, selection_set);
        if fields.len() != 1 {
            let location = if path.is_empty() {
                "its root selection set".to_string()
            } else {
                format!("`{}`", path.join("."))
            };
            messages.error(
                format!(
                    "subscription {} must select exactly one root field, but {location} \
                     selects {}",
                    describe(operation.name()),
                    fields.len(),
                ),
                ctx.document.part(selection_set).position(),
            );
            return;
        }

        let (key, field_id) = fields[0];
        let Some(selection) = ctx.document.field_selection(field_id) else {
            return;
        };
        match selection.selection_set() {
            Some(nested) if selection.field().is_virtual() => {
                path.push(key);
                selection_set = nested;
            },
            _ => return,
        }
    }
}

/// Response keys selected by `selection_set`, with the first field selected
/// under each.
fn distinct_fields<'a>(document: &'a QueryDocument<'_>, selection_set: PartId) -> Vec<(&'a str, PartId)> {
    let mut by_key: IndexMap<&'a str, PartId> = IndexMap::new();
    for collected in collect_fields(document, selection_set) {
        by_key
            .entry(collected.selection.response_key())
            .or_insert(collected.id);
    }
    by_key.into_iter().collect()
}

fn describe(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("`{name}`"),
        None => "operation".to_string(),
    }
}
