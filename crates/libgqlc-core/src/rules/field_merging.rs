use crate::document::PartId;
use crate::document::PartKind;
use crate::document::QueryDocument;
use crate::document::SuppliedValue;
use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use crate::rules::walk::CollectedField;
use crate::rules::walk::collect_fields;
use crate::schema::Schema;
use crate::types::TypeExpression;
use indexmap::IndexMap;

pub const FIELD_SELECTION_MERGING: PartRule = PartRule {
    rule_number: "5.3.2",
    anchor: anchors::FIELD_SELECTION_MERGING,
    applies: is_selection_set,
    execute: check_field_selection_merging,
};

fn is_selection_set(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_selection_set().is_some()
}

/// Fields sharing a response key must resolve to the same shape. When their
/// parent types can describe the same object they must also be the same
/// field with the same arguments.
///
/// Pairs reached through one fragment are left to that fragment's own
/// selection set, so each conflict is reported once.
fn check_field_selection_merging(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let checker = MergeChecker {
        document: ctx.document,
        schema: ctx.schema,
    };
    let fields = collect_fields(ctx.document, ctx.id);
    for group in group_by_response_key(&fields).values() {
        for (i, first) in group.iter().enumerate() {
            for second in &group[i + 1..] {
                if first.fragment.is_some() && first.fragment == second.fragment {
                    continue;
                }
                if let Some(reason) = checker.conflict(first, second, false) {
                    messages.error(
                        format!(
                            "fields with response key `{}` cannot be merged: {reason}",
                            first.selection.response_key(),
                        ),
                        ctx.document.part(second.id).position(),
                    );
                }
            }
        }
    }
}

fn group_by_response_key<'f, 'a, 'schema>(
    fields: &'f [CollectedField<'a, 'schema>],
) -> IndexMap<&'a str, Vec<&'f CollectedField<'a, 'schema>>> {
    let mut groups: IndexMap<&'a str, Vec<&'f CollectedField<'a, 'schema>>> = IndexMap::new();
    for field in fields {
        groups
            .entry(field.selection.response_key())
            .or_default()
            .push(field);
    }
    groups
}

struct MergeChecker<'a, 'schema> {
    document: &'a QueryDocument<'schema>,
    schema: &'schema Schema,
}
impl MergeChecker<'_, '_> {
    /// Once two parents are known never to describe the same object, every
    /// pair beneath them only has to agree on shape.
    fn conflict(
        &self,
        first: &CollectedField<'_, '_>,
        second: &CollectedField<'_, '_>,
        parents_mutually_exclusive: bool,
    ) -> Option<String> {
        let a = first.selection;
        let b = second.selection;

        let mutually_exclusive = parents_mutually_exclusive
            || !self.schema.types_overlap(a.parent_type(), b.parent_type());
        if !mutually_exclusive {
            if a.field().name() != b.field().name() {
                return Some(format!(
                    "`{}` and `{}` are different fields",
                    a.field().name(),
                    b.field().name(),
                ));
            }
            if !self.same_arguments(first.id, second.id) {
                return Some(format!("`{}` is selected with different arguments", a.field().name()));
            }
        }

        let a_type = a.field().type_expression();
        let b_type = b.field().type_expression();
        if !self.same_shape(a_type, b_type) {
            return Some(format!("they return conflicting types `{a_type}` and `{b_type}`"));
        }

        let (Some(a_set), Some(b_set)) = (a.selection_set(), b.selection_set()) else {
            return None;
        };
        self.subfield_conflict(a_set, b_set, mutually_exclusive)
    }

    /// Compares every subfield of one selection set against the subfields
    /// of the other that share its response key.
    fn subfield_conflict(
        &self,
        a_set: PartId,
        b_set: PartId,
        parents_mutually_exclusive: bool,
    ) -> Option<String> {
        let a_fields = collect_fields(self.document, a_set);
        let b_fields = collect_fields(self.document, b_set);
        let b_groups = group_by_response_key(&b_fields);
        for a_field in &a_fields {
            let key = a_field.selection.response_key();
            for b_field in b_groups.get(key).into_iter().flatten() {
                if let Some(reason) = self.conflict(a_field, b_field, parents_mutually_exclusive) {
                    return Some(format!("subfields `{key}` conflict because {reason}"));
                }
            }
        }
        None
    }

    fn same_shape(&self, a: &TypeExpression, b: &TypeExpression) -> bool {
        if a.is_nullable() != b.is_nullable() {
            return false;
        }
        match (a.list_item(), b.list_item()) {
            (Some(a_item), Some(b_item)) => self.same_shape(a_item, b_item),
            (None, None) => {
                let is_leaf = |name: &str| {
                    self.schema
                        .type_by_name(name)
                        .is_none_or(|graph_type| graph_type.is_leaf())
                };
                let (a_name, b_name) = (a.innermost_name(), b.innermost_name());
                if is_leaf(a_name) || is_leaf(b_name) {
                    a_name == b_name
                } else {
                    true
                }
            },
            _ => false,
        }
    }

    fn same_arguments(&self, a_field: PartId, b_field: PartId) -> bool {
        let a_args = self.arguments_of(a_field);
        let b_args = self.arguments_of(b_field);
        a_args.len() == b_args.len()
            && a_args.iter().all(|(name, a_value)| {
                b_args
                    .get(name)
                    .is_some_and(|b_value| self.same_value(*a_value, *b_value))
            })
    }

    fn arguments_of(&self, owner: PartId) -> IndexMap<&str, Option<PartId>> {
        self.document
            .part(owner)
            .children()
            .iter()
            .filter_map(|&child| self.document.part(child).as_argument())
            .map(|argument| (argument.name(), argument.value()))
            .collect()
    }

    fn same_value(&self, a: Option<PartId>, b: Option<PartId>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return a.is_none() && b.is_none();
        };
        let (PartKind::SuppliedValue(a_value), PartKind::SuppliedValue(b_value)) =
            (self.document.part(a).kind(), self.document.part(b).kind())
        else {
            return false;
        };
        if a_value.value() != b_value.value() {
            return false;
        }
        match a_value.value() {
            SuppliedValue::List => {
                let a_items = self.document.part(a).children();
                let b_items = self.document.part(b).children();
                a_items.len() == b_items.len()
                    && a_items
                        .iter()
                        .zip(b_items)
                        .all(|(a_item, b_item)| self.same_value(Some(*a_item), Some(*b_item)))
            },
            SuppliedValue::Complex => {
                let a_fields = self.arguments_of(a);
                let b_fields = self.arguments_of(b);
                a_fields.len() == b_fields.len()
                    && a_fields.iter().all(|(name, a_field)| {
                        b_fields
                            .get(name)
                            .is_some_and(|b_field| self.same_value(*a_field, *b_field))
                    })
            },
            _ => true,
        }
    }
}
