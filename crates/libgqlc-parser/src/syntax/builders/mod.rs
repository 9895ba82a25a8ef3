//! One builder per syntax node kind.
//!
//! A builder checks that the stream is positioned at a token it handles,
//! consumes its tokens, appends its node(s) under the supplied parent and
//! hands nested constructs to the builders responsible for them.

mod arguments;
mod document;
mod selections;
mod values;
mod variables;

pub use arguments::DirectiveBuilder;
pub use arguments::InputItemBuilder;
pub use arguments::InputItemCollectionBuilder;
pub use document::DocumentBuilder;
pub use document::FragmentBuilder;
pub use document::OperationBuilder;
pub use selections::FieldBuilder;
pub use selections::FragmentSpreadBuilder;
pub use selections::InlineFragmentBuilder;
pub use selections::SelectionSetBuilder;
pub use values::ComplexValueBuilder;
pub use values::EnumValueBuilder;
pub use values::ListValueBuilder;
pub use values::NullValueBuilder;
pub use values::ScalarValueBuilder;
pub use values::ValueBuilder;
pub use values::VariableValueBuilder;
pub use variables::VariableBuilder;
pub use variables::VariableCollectionBuilder;

use crate::SourceSpan;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxTree;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;

/// Builds the node(s) for one syntactic construct.
pub trait SyntaxNodeBuilder {
    /// Consumes the construct at the head of the stream and appends its
    /// node(s) under `parent`.
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError>;
}

/// Shared state threaded through every builder.
pub struct BuildContext<'src> {
    pub stream: TokenStream<'src>,
    pub tree: SyntaxTree<'src>,
    depth: usize,
    max_depth: usize,
    /// Set while building a variable's default value, where `$var` is not
    /// allowed.
    pub(crate) constant_values: bool,
}

impl<'src> BuildContext<'src> {
    pub fn new(source: &'src str, max_depth: usize) -> Self {
        Self {
            stream: TokenStream::new(source),
            tree: SyntaxTree::new(source),
            depth: 0,
            max_depth,
            constant_values: false,
        }
    }

    pub fn into_tree(self) -> SyntaxTree<'src> {
        self.tree
    }

    /// Appends a node whose span starts at `start` and (for now) ends where
    /// `start` ends. Call [`Self::finish`] once its tokens are consumed.
    pub fn open(&mut self, parent: NodeId, kind: SyntaxNodeKind, start: &Token<'src>) -> NodeId {
        self.tree.append_child(parent, kind, start.span)
    }

    /// Extends `node`'s span to the end of the last consumed token.
    pub fn finish(&mut self, node: NodeId) {
        let end = self.stream.last_end();
        let span = &mut self.tree.node_mut(node).span;
        if end.byte_offset() > span.end_exclusive.byte_offset() {
            span.end_exclusive = end;
        }
    }

    pub fn set_name(&mut self, node: NodeId, name: &'src str) {
        self.tree.node_mut(node).name = Some(name);
    }

    pub fn set_alias(&mut self, node: NodeId, alias: &'src str) {
        self.tree.node_mut(node).alias = Some(alias);
    }

    pub fn set_literal(&mut self, node: NodeId, literal: &'src str) {
        self.tree.node_mut(node).literal = Some(literal);
    }

    /// Enters one level of nesting, failing once `max_depth` is exceeded.
    pub fn descend(&mut self, at: SourceSpan) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let mut error = SyntaxError::new(
                format!("document nesting exceeds the maximum depth of {}", self.max_depth),
                at,
                SyntaxErrorKind::MaxDepthExceeded {
                    max_depth: self.max_depth,
                },
            );
            error.add_help("reduce the nesting of selections or values");
            return Err(error);
        }
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds an "unterminated collection" error for a collection opened by
    /// `opener` when the end of input is reached.
    pub fn unterminated(&mut self, opener: &Token<'src>, closer: &'static str) -> SyntaxError {
        let eof_span = SourceSpan::at(self.stream.last_end());
        let mut error = SyntaxError::new(
            format!(
                "unterminated `{}`: expected `{closer}`, received end of input",
                opener.text,
            ),
            opener.span,
            SyntaxErrorKind::UnterminatedCollection { delimiter: closer },
        );
        error.add_note_with_span("end of input reached here", eof_span);
        error
    }

    /// Builds directives while the stream is at `@`.
    pub fn build_directives(&mut self, parent: NodeId) -> Result<(), SyntaxError> {
        while self.stream.at(TokenKind::At)? {
            DirectiveBuilder.build(self, parent)?;
        }
        Ok(())
    }
}
