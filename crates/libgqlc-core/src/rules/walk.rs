use crate::document::DocumentPart;
use crate::document::FieldSelectionPart;
use crate::document::FragmentPart;
use crate::document::PartId;
use crate::document::PartKind;
use crate::document::QueryDocument;
use std::collections::HashSet;

/// A field selection reached from a selection set, directly or through
/// fragment spreads.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CollectedField<'a, 'schema> {
    pub(crate) id: PartId,
    pub(crate) selection: &'a FieldSelectionPart<'schema>,
    /// The spread fragment the field was reached through, if any.
    pub(crate) fragment: Option<&'a str>,
}

/// Every field selected by `selection_set`, expanding fragment spreads.
/// Inline fragment fields are already part of the selection set.
pub(crate) fn collect_fields<'a, 'schema>(
    document: &'a QueryDocument<'schema>,
    selection_set: PartId,
) -> Vec<CollectedField<'a, 'schema>> {
    let mut fields = vec![];
    collect_into(document, selection_set, None, &mut vec![], &mut fields);
    fields
}

fn collect_into<'a, 'schema>(
    document: &'a QueryDocument<'schema>,
    selection_set: PartId,
    fragment: Option<&'a str>,
    expanding: &mut Vec<&'a str>,
    out: &mut Vec<CollectedField<'a, 'schema>>,
) {
    for &child in document.part(selection_set).children() {
        match document.part(child).kind() {
            PartKind::FieldSelection(selection) => out.push(CollectedField {
                id: child,
                selection,
                fragment,
            }),
            PartKind::FragmentSpread(spread) => {
                let name = spread.name();
                if expanding.contains(&name) {
                    continue;
                }
                let Some(target) = document.fragment(name).and_then(FragmentPart::selection_set)
                else {
                    continue;
                };
                expanding.push(name);
                collect_into(document, target, fragment.or(Some(name)), expanding, out);
                expanding.pop();
            },
            _ => (),
        }
    }
}

/// Calls `visit` for every part beneath `root` and beneath every fragment
/// it spreads, transitively. Each fragment is visited once.
pub(crate) fn visit_with_spreads<'a, 'schema>(
    document: &'a QueryDocument<'schema>,
    root: PartId,
    mut visit: impl FnMut(PartId, &'a DocumentPart<'schema>),
) {
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut pending = vec![root];
    while let Some(next) = pending.pop() {
        for id in document.descendants(next) {
            let part = document.part(id);
            if let PartKind::FragmentSpread(spread) = part.kind() {
                if visited.insert(spread.name()) {
                    if let Some(fragment) = document.fragments().get(spread.name()) {
                        pending.push(fragment);
                    }
                }
            }
            visit(id, part);
        }
    }
}

/// The deepest field nesting under `selection_set`, following fragment
/// spreads but never re-entering a fragment already being expanded.
pub(crate) fn selection_depth<'a>(
    document: &'a QueryDocument<'_>,
    selection_set: PartId,
    expanding: &mut Vec<&'a str>,
) -> usize {
    let mut depth = 0;
    for &child in document.part(selection_set).children() {
        match document.part(child).kind() {
            PartKind::FieldSelection(selection) => {
                let nested = selection
                    .selection_set()
                    .map(|set| selection_depth(document, set, expanding))
                    .unwrap_or(0);
                depth = depth.max(nested + 1);
            },
            PartKind::FragmentSpread(spread) => {
                let name = spread.name();
                if expanding.contains(&name) {
                    continue;
                }
                if let Some(target) = document.fragment(name).and_then(FragmentPart::selection_set) {
                    expanding.push(name);
                    depth = depth.max(selection_depth(document, target, expanding));
                    expanding.pop();
                }
            },
            _ => (),
        }
    }
    depth
}
