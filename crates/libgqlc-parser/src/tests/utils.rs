use crate::SyntaxError;
use crate::SyntaxTree;
use crate::parse_document;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;

pub fn parse_ok(source: &str) -> SyntaxTree<'_> {
    parse_document(source)
        .unwrap_or_else(|error| panic!("failed to parse {source:?}: {error}"))
}

pub fn parse_err(source: &str) -> SyntaxError {
    match parse_document(source) {
        Ok(_) => panic!("expected a syntax error for {source:?}"),
        Err(error) => error,
    }
}

pub fn child_kinds(tree: &SyntaxTree<'_>, id: NodeId) -> Vec<SyntaxNodeKind> {
    tree.children(id).map(|child| tree.node(child).kind).collect()
}

/// The nth child of `id`.
pub fn nth_child(tree: &SyntaxTree<'_>, id: NodeId, n: usize) -> NodeId {
    tree.children(id)
        .nth(n)
        .unwrap_or_else(|| panic!("node {id} has no child {n}"))
}
