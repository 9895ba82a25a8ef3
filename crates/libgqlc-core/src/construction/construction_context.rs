use crate::construction::ConstructionError;
use crate::document::DocumentScope;
use crate::document::PartId;
use crate::schema::DirectiveDefinition;
use crate::schema::DirectiveLocation;
use crate::schema::Field;
use crate::schema::GraphType;
use crate::schema::InputObjectType;
use crate::schema::Schema;
use crate::types::TypeExpression;
use libgqlc_parser::SourcePosition;
use libgqlc_parser::SyntaxTree;
use libgqlc_parser::syntax::NodeId;
use libgqlc_parser::syntax::SyntaxNode;
use std::rc::Rc;

/// Where the arguments of the active part are looked up.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) enum ArgumentSource<'schema> {
    #[default]
    None,
    Field(&'schema Field),
    Directive(Option<&'schema DirectiveDefinition>),
    InputObject(Option<&'schema InputObjectType>),
}

/// Per-level state handed down the walk. Each level works on its own copy.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContextItems<'schema> {
    pub(crate) operation: Option<PartId>,
    /// Receives directives, arguments and variables.
    pub(crate) owner: Option<PartId>,
    pub(crate) selection_set: Option<PartId>,
    /// Receives a supplied value.
    pub(crate) assignable: Option<PartId>,
    pub(crate) expected_type: Option<TypeExpression>,
    pub(crate) location_has_default: bool,
    pub(crate) directive_location: Option<DirectiveLocation>,
    pub(crate) argument_source: ArgumentSource<'schema>,
    pub(crate) field_depth: usize,
}

/// One syntax node being constructed, with its scope and context items.
pub struct ConstructionContext<'a, 'schema, 'src> {
    pub(crate) schema: &'schema Schema,
    pub(crate) tree: &'a SyntaxTree<'src>,
    pub(crate) node_id: NodeId,
    pub(crate) scope: Rc<DocumentScope>,
    pub(crate) items: ContextItems<'schema>,
}
impl<'a, 'schema, 'src> ConstructionContext<'a, 'schema, 'src> {
    pub(crate) fn new(
        schema: &'schema Schema,
        tree: &'a SyntaxTree<'src>,
        node_id: NodeId,
        scope: Rc<DocumentScope>,
        items: ContextItems<'schema>,
    ) -> Self {
        Self {
            schema,
            tree,
            node_id,
            scope,
            items,
        }
    }

    /// A context for `child` sharing this context's scope and items.
    pub(crate) fn descend(&self, child: NodeId) -> Self {
        Self::new(
            self.schema,
            self.tree,
            child,
            Rc::clone(&self.scope),
            self.items.clone(),
        )
    }

    /// A context for `child` with a different scope and items.
    pub(crate) fn descend_with(
        &self,
        child: NodeId,
        scope: Rc<DocumentScope>,
        items: ContextItems<'schema>,
    ) -> Self {
        Self::new(self.schema, self.tree, child, scope, items)
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    pub fn tree(&self) -> &'a SyntaxTree<'src> {
        self.tree
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn node(&self) -> &'a SyntaxNode<'src> {
        self.tree.node(self.node_id)
    }

    pub fn position(&self) -> SourcePosition {
        self.node().span.start_inclusive
    }

    /// The graph type selections at this point resolve against.
    pub fn scoped_type(&self) -> Option<&'schema GraphType> {
        self.scope
            .graph_type()
            .and_then(|name| self.schema.type_by_name(name))
    }

    pub(crate) fn unrecognized(&self) -> ConstructionError {
        let node = self.node();
        ConstructionError::UnrecognizedNode {
            kind: node.kind,
            parent: node.parent.map(|parent| self.tree.node(parent).kind),
            position: node.span.start_inclusive,
        }
    }
}
