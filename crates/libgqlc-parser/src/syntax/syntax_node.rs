use crate::SourceSpan;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;

/// A node in a [`SyntaxTree`](crate::syntax::SyntaxTree).
///
/// Links to related nodes are arena indices. Children form a singly linked
/// list through `first_child` and `next_sibling`, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode<'src> {
    pub kind: SyntaxNodeKind,
    pub span: SourceSpan,
    pub name: Option<&'src str>,
    pub alias: Option<&'src str>,
    pub literal: Option<&'src str>,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl<'src> SyntaxNode<'src> {
    pub(crate) fn new(kind: SyntaxNodeKind, span: SourceSpan) -> Self {
        Self {
            kind,
            span,
            name: None,
            alias: None,
            literal: None,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    /// The response key of a field: its alias if present, else its name.
    pub fn response_key(&self) -> Option<&'src str> {
        self.alias.or(self.name)
    }
}
