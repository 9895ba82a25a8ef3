use crate::document::FieldSelectionPart;
use crate::document::FieldSelectionSetPart;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::InputArgumentPart;
use crate::document::PartCollection;
use crate::document::PartId;
use crate::document::SuppliedValuePart;
use crate::document::VariablePart;
use crate::schema::DirectiveDefinition;
use crate::schema::DirectiveLocation;
use crate::schema::OperationKind;
use libgqlc_parser::SourcePosition;
use std::cell::Cell;

/// One node of a [`QueryDocument`](crate::document::QueryDocument).
#[derive(Clone, Debug)]
pub struct DocumentPart<'schema> {
    pub(crate) kind: PartKind<'schema>,
    pub(crate) parent: Option<PartId>,
    pub(crate) children: Vec<PartId>,
    pub(crate) position: SourcePosition,
    pub(crate) inherited_directives: Vec<PartId>,
}
impl<'schema> DocumentPart<'schema> {
    pub(crate) fn new(
        kind: PartKind<'schema>,
        position: SourcePosition,
        inherited_directives: Vec<PartId>,
    ) -> Self {
        Self {
            kind,
            parent: None,
            children: vec![],
            position,
            inherited_directives,
        }
    }

    pub fn kind(&self) -> &PartKind<'schema> {
        &self.kind
    }

    pub fn parent(&self) -> Option<PartId> {
        self.parent
    }

    pub fn children(&self) -> &[PartId] {
        &self.children
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Directive parts applied to an enclosing scope when this part was
    /// added, outermost first. A part's own directives are its children.
    pub fn inherited_directives(&self) -> &[PartId] {
        &self.inherited_directives
    }

    pub fn as_operation(&self) -> Option<&OperationPart> {
        match &self.kind {
            PartKind::Operation(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&FragmentPart> {
        match &self.kind {
            PartKind::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub fn as_selection_set(&self) -> Option<&FieldSelectionSetPart> {
        match &self.kind {
            PartKind::FieldSelectionSet(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldSelectionPart<'schema>> {
        match &self.kind {
            PartKind::FieldSelection(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragmentPart> {
        match &self.kind {
            PartKind::InlineFragment(inline) => Some(inline),
            _ => None,
        }
    }

    pub fn as_fragment_spread(&self) -> Option<&FragmentSpreadPart> {
        match &self.kind {
            PartKind::FragmentSpread(spread) => Some(spread),
            _ => None,
        }
    }

    pub fn as_argument(&self) -> Option<&InputArgumentPart<'schema>> {
        match &self.kind {
            PartKind::InputArgument(arg) => Some(arg),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariablePart> {
        match &self.kind {
            PartKind::Variable(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&SuppliedValuePart> {
        match &self.kind {
            PartKind::SuppliedValue(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_directive(&self) -> Option<&DirectivePart<'schema>> {
        match &self.kind {
            PartKind::Directive(directive) => Some(directive),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum PartKind<'schema> {
    Operation(OperationPart),
    Fragment(FragmentPart),
    FieldSelectionSet(FieldSelectionSetPart),
    FieldSelection(FieldSelectionPart<'schema>),
    InlineFragment(InlineFragmentPart),
    FragmentSpread(FragmentSpreadPart),
    InputArgument(InputArgumentPart<'schema>),
    Variable(VariablePart),
    SuppliedValue(SuppliedValuePart),
    Directive(DirectivePart<'schema>),
}
impl PartKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Operation(_) => "Operation",
            Self::Fragment(_) => "Fragment",
            Self::FieldSelectionSet(_) => "FieldSelectionSet",
            Self::FieldSelection(_) => "FieldSelection",
            Self::InlineFragment(_) => "InlineFragment",
            Self::FragmentSpread(_) => "FragmentSpread",
            Self::InputArgument(_) => "InputArgument",
            Self::Variable(_) => "Variable",
            Self::SuppliedValue(_) => "SuppliedValue",
            Self::Directive(_) => "Directive",
        }
    }
}

/// A query, mutation or subscription.
#[derive(Clone, Debug)]
pub struct OperationPart {
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) root_type: String,
    pub(crate) variables: PartCollection,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) field_depth: usize,
}
impl OperationPart {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Names this operation in messages.
    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("operation `{name}`"),
            None => "the anonymous operation".to_string(),
        }
    }

    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    pub fn variables(&self) -> &PartCollection {
        &self.variables
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    /// Deepest field nesting written directly in this operation, not
    /// following fragment spreads.
    pub fn field_depth(&self) -> usize {
        self.field_depth
    }
}

/// A named fragment definition.
#[derive(Clone, Debug)]
pub struct FragmentPart {
    pub(crate) name: String,
    pub(crate) type_condition: String,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) referenced: Cell<bool>,
}
impl FragmentPart {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_condition(&self) -> &str {
        &self.type_condition
    }

    /// Absent when the type condition does not name a composite type.
    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    pub fn is_referenced(&self) -> bool {
        self.referenced.get()
    }

    pub(crate) fn mark_referenced(&self) {
        self.referenced.set(true);
    }
}

/// A directive application.
#[derive(Clone, Debug)]
pub struct DirectivePart<'schema> {
    pub(crate) name: String,
    pub(crate) location: DirectiveLocation,
    pub(crate) definition: Option<&'schema DirectiveDefinition>,
}
impl<'schema> DirectivePart<'schema> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> DirectiveLocation {
        self.location
    }

    pub fn definition(&self) -> Option<&'schema DirectiveDefinition> {
        self.definition
    }
}
