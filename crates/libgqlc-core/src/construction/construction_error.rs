use libgqlc_parser::SourcePosition;
use libgqlc_parser::syntax::SyntaxNodeKind;

/// A syntax tree the constructor cannot bind.
///
/// The syntax builders never produce such a tree; this guards trees built
/// by other means.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("unrecognized {kind:?} node at {position}{}", within(.parent))]
    UnrecognizedNode {
        kind: SyntaxNodeKind,
        parent: Option<SyntaxNodeKind>,
        position: SourcePosition,
    },
}
impl ConstructionError {
    pub fn position(&self) -> SourcePosition {
        match self {
            Self::UnrecognizedNode { position, .. } => *position,
        }
    }
}

fn within(parent: &Option<SyntaxNodeKind>) -> String {
    match parent {
        Some(parent) => format!(" within a {parent:?} node"),
        None => String::new(),
    }
}
