//! The arena-allocated syntax tree and the builders that produce it.

pub mod builders;
mod node_id;
mod parser_options;
mod syntax_node;
mod syntax_node_kind;
mod syntax_tree;

pub use node_id::NodeId;
pub use parser_options::ParserOptions;
pub use syntax_node::SyntaxNode;
pub use syntax_node_kind::ScalarValueKind;
pub use syntax_node_kind::SyntaxNodeKind;
pub use syntax_tree::Children;
pub use syntax_tree::SyntaxTree;

use crate::SyntaxError;
use crate::syntax::builders::BuildContext;
use crate::syntax::builders::DocumentBuilder;
use crate::syntax::builders::SyntaxNodeBuilder;

/// Parses an executable document with default [`ParserOptions`].
pub fn parse_document(source: &str) -> Result<SyntaxTree<'_>, SyntaxError> {
    parse_document_with_options(source, &ParserOptions::default())
}

/// Parses an executable document into a [`SyntaxTree`].
///
/// Fails on the first lexical or syntax error; no partial tree is returned.
pub fn parse_document_with_options<'src>(
    source: &'src str,
    options: &ParserOptions,
) -> Result<SyntaxTree<'src>, SyntaxError> {
    let mut ctx = BuildContext::new(source, options.max_depth);
    let root = ctx.tree.root();
    DocumentBuilder.build(&mut ctx, root)?;
    let tree = ctx.into_tree();
    log::debug!("built syntax tree with {} nodes", tree.len());
    Ok(tree)
}
