use crate::document::PartId;
use crate::schema::Field;

/// A `{ ... }` block of selections resolved against one graph type.
///
/// Fields written inside inline fragments are flattened into the enclosing
/// selection set; each keeps the type it was resolved against in
/// [`FieldSelectionPart::parent_type()`].
#[derive(Clone, Debug)]
pub struct FieldSelectionSetPart {
    pub(crate) graph_type: String,
}
impl FieldSelectionSetPart {
    pub fn graph_type(&self) -> &str {
        &self.graph_type
    }
}

/// A field selected from a composite type and bound to its schema [`Field`].
#[derive(Clone, Debug)]
pub struct FieldSelectionPart<'schema> {
    pub(crate) alias: Option<String>,
    pub(crate) requested_name: String,
    pub(crate) field: &'schema Field,
    pub(crate) parent_type: String,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) swapped: bool,
}
impl<'schema> FieldSelectionPart<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The field name as written in the document.
    pub fn requested_name(&self) -> &str {
        &self.requested_name
    }

    /// The key this selection occupies in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.requested_name)
    }

    pub fn field(&self) -> &'schema Field {
        self.field
    }

    /// The type the field was resolved against: the enclosing selection set's
    /// type, an inline fragment's type condition, or one concrete type of an
    /// abstract `__typename` expansion.
    pub fn parent_type(&self) -> &str {
        &self.parent_type
    }

    pub fn return_type(&self) -> &'schema str {
        self.field.return_type()
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    /// Whether [`QueryDocument::swap_field()`](crate::document::QueryDocument::swap_field)
    /// replaced the bound field after construction.
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }
}

/// `... on Type { ... }`. Its fields live in the enclosing selection set.
#[derive(Clone, Debug)]
pub struct InlineFragmentPart {
    pub(crate) type_condition: Option<String>,
    pub(crate) parent_type: String,
}
impl InlineFragmentPart {
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }

    pub fn parent_type(&self) -> &str {
        &self.parent_type
    }
}

/// `...FragmentName`. The named fragment is resolved during validation.
#[derive(Clone, Debug)]
pub struct FragmentSpreadPart {
    pub(crate) name: String,
    pub(crate) parent_type: String,
}
impl FragmentSpreadPart {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_type(&self) -> &str {
        &self.parent_type
    }
}
