use crate::SourceSpan;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;

/// An arena of [`SyntaxNode`]s rooted at a `Document` node.
///
/// The tree borrows every name and literal from its source text and is not
/// modified once built.
#[derive(Clone, Debug)]
pub struct SyntaxTree<'src> {
    source: &'src str,
    nodes: Vec<SyntaxNode<'src>>,
}

impl<'src> SyntaxTree<'src> {
    /// Creates a tree holding only the root `Document` node.
    pub fn new(source: &'src str) -> Self {
        let root = SyntaxNode::new(SyntaxNodeKind::Document, SourceSpan::default());
        Self {
            source,
            nodes: vec![root],
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &SyntaxNode<'src> {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode<'src>> {
        self.nodes.get(id.index())
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SyntaxNode<'src> {
        &mut self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> Children<'_, 'src> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// The first child of `id` with the given kind.
    pub fn child_of_kind(&self, id: NodeId, kind: SyntaxNodeKind) -> Option<NodeId> {
        self.children(id).find(|child| self.node(*child).kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode<'src>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx as u32), node))
    }

    /// Appends a new node as the last child of `parent`.
    pub fn append_child(
        &mut self,
        parent: NodeId,
        kind: SyntaxNodeKind,
        span: SourceSpan,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut node = SyntaxNode::new(kind, span);
        node.parent = Some(parent);
        self.nodes.push(node);

        match self.nodes[parent.index()].last_child {
            Some(prev) => self.nodes[prev.index()].next_sibling = Some(id),
            None => self.nodes[parent.index()].first_child = Some(id),
        }
        self.nodes[parent.index()].last_child = Some(id);
        id
    }
}

/// Iterator over the children of a node, in source order.
pub struct Children<'tree, 'src> {
    tree: &'tree SyntaxTree<'src>,
    next: Option<NodeId>,
}

impl Iterator for Children<'_, '_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}
