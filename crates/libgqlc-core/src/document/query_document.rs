use crate::document::DocumentPart;
use crate::document::FieldSelectionPart;
use crate::document::FragmentPart;
use crate::document::PartCollection;
use crate::document::PartId;
use crate::document::PartKind;
use crate::schema::Field;

/// A schema-bound executable document.
///
/// Parts live in one arena and refer to each other by [`PartId`]. The
/// document is built once by the
/// [`DocumentGenerator`](crate::construction::DocumentGenerator); afterwards
/// only the "referenced" flags of fragments and variables change, and only
/// from unset to set.
#[derive(Clone, Debug)]
pub struct QueryDocument<'schema> {
    pub(crate) parts: Vec<DocumentPart<'schema>>,
    pub(crate) roots: Vec<PartId>,
    pub(crate) operations: PartCollection,
    pub(crate) fragments: PartCollection,
}
impl<'schema> QueryDocument<'schema> {
    pub(crate) fn new() -> Self {
        Self {
            parts: vec![],
            roots: vec![],
            operations: PartCollection::new(),
            fragments: PartCollection::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this document.
    pub fn part(&self, id: PartId) -> &DocumentPart<'schema> {
        &self.parts[id.index()]
    }

    pub fn get(&self, id: PartId) -> Option<&DocumentPart<'schema>> {
        self.parts.get(id.index())
    }

    pub(crate) fn part_mut(&mut self, id: PartId) -> &mut DocumentPart<'schema> {
        &mut self.parts[id.index()]
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Operations and fragments, in source order.
    pub fn roots(&self) -> &[PartId] {
        &self.roots
    }

    pub fn operations(&self) -> &PartCollection {
        &self.operations
    }

    pub fn fragments(&self) -> &PartCollection {
        &self.fragments
    }

    /// The first fragment defined with `name`.
    pub fn fragment(&self, name: &str) -> Option<&FragmentPart> {
        self.fragments
            .get(name)
            .and_then(|id| self.part(id).as_fragment())
    }

    /// The first operation named `name`.
    pub fn operation(&self, name: &str) -> Option<PartId> {
        self.operations.get(name)
    }

    pub fn field_selection(&self, id: PartId) -> Option<&FieldSelectionPart<'schema>> {
        self.get(id).and_then(DocumentPart::as_field)
    }

    /// Adds `part` to the arena, as the last child of `parent` if given.
    pub(crate) fn push(
        &mut self,
        parent: Option<PartId>,
        mut part: DocumentPart<'schema>,
    ) -> PartId {
        let id = PartId(self.parts.len() as u32);
        part.parent = parent;
        self.parts.push(part);
        match parent {
            Some(parent) => self.parts[parent.index()].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Rebinds a field selection to `field`, as directive execution does.
    ///
    /// The swap is recorded on the part; validation reports swapped fields
    /// whose name no longer matches the requested name. Returns `false` if
    /// `id` is not a field selection.
    pub fn swap_field(&mut self, id: PartId, field: &'schema Field) -> bool {
        match self.parts.get_mut(id.index()).map(|part| &mut part.kind) {
            Some(PartKind::FieldSelection(selection)) => {
                log::debug!(
                    "swapping field `{}` for `{}.{}`",
                    selection.requested_name,
                    field.parent_type(),
                    field.name(),
                );
                selection.field = field;
                selection.swapped = true;
                true
            },
            _ => false,
        }
    }

    /// Every part beneath `id` (inclusive), in pre-order.
    pub fn descendants(&self, id: PartId) -> Descendants<'_, 'schema> {
        Descendants {
            document: self,
            stack: vec![id],
        }
    }

    /// Every part of the document in pre-order from its roots.
    pub fn iter(&self) -> impl Iterator<Item = PartId> + '_ {
        self.roots.iter().flat_map(|root| self.descendants(*root))
    }
}

/// Pre-order iterator over a subtree of parts.
pub struct Descendants<'doc, 'schema> {
    document: &'doc QueryDocument<'schema>,
    stack: Vec<PartId>,
}

impl Iterator for Descendants<'_, '_> {
    type Item = PartId;

    fn next(&mut self) -> Option<PartId> {
        let id = self.stack.pop()?;
        let children = self.document.part(id).children();
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}
