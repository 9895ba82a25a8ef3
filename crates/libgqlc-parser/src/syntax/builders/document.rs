use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::builders::BuildContext;
use crate::syntax::builders::SelectionSetBuilder;
use crate::syntax::builders::SyntaxNodeBuilder;
use crate::syntax::builders::VariableCollectionBuilder;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;

const DEFINITION_EXPECTED: &str = "`query`, `mutation`, `subscription`, `fragment` or `{`";

/// Builds the operations and fragments of a document.
pub struct DocumentBuilder;

impl SyntaxNodeBuilder for DocumentBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let source = ctx.tree.source();
        ctx.tree.node_mut(parent).span = SourceSpan::new(
            SourcePosition::default(),
            SourcePosition::default().advanced_over(source),
        );

        let mut definitions = 0usize;
        loop {
            let token = ctx.stream.peek()?;
            match token.kind {
                TokenKind::Eof if definitions > 0 => return Ok(()),
                TokenKind::CurlyBraceOpen => OperationBuilder.build(ctx, parent)?,
                TokenKind::Name => match token.text {
                    "query" | "mutation" | "subscription" => {
                        OperationBuilder.build(ctx, parent)?
                    },
                    "fragment" => FragmentBuilder.build(ctx, parent)?,
                    _ => {
                        let mut error = TokenStream::unexpected(DEFINITION_EXPECTED, &token);
                        if is_type_system_keyword(token.text) {
                            error.add_note(
                                "type system definitions are not allowed in an executable \
                                 document",
                            );
                        }
                        return Err(error);
                    },
                },
                _ => return Err(TokenStream::unexpected(DEFINITION_EXPECTED, &token)),
            }
            definitions += 1;
        }
    }
}

fn is_type_system_keyword(text: &str) -> bool {
    matches!(
        text,
        "schema"
            | "scalar"
            | "type"
            | "interface"
            | "union"
            | "enum"
            | "input"
            | "directive"
            | "extend",
    )
}

/// Builds an operation definition, including the `{ ... }` shorthand.
pub struct OperationBuilder;

impl SyntaxNodeBuilder for OperationBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let start = ctx.stream.peek()?;
        let operation = ctx.open(parent, SyntaxNodeKind::Operation, &start);

        if start.kind == TokenKind::CurlyBraceOpen {
            SelectionSetBuilder.build(ctx, operation)?;
            ctx.finish(operation);
            return Ok(());
        }

        let keyword = ctx.stream.expect_name("`query`, `mutation` or `subscription`")?;
        ctx.set_literal(operation, keyword.text);

        if matches!(ctx.stream.peek_kind()?, TokenKind::Name | TokenKind::Null) {
            let name = ctx.stream.consume()?;
            ctx.set_name(operation, name.text);
        }
        if ctx.stream.at(TokenKind::ParenOpen)? {
            VariableCollectionBuilder.build(ctx, operation)?;
        }
        ctx.build_directives(operation)?;

        let next = ctx.stream.peek()?;
        if next.kind != TokenKind::CurlyBraceOpen {
            return Err(TokenStream::unexpected("`{`", &next));
        }
        SelectionSetBuilder.build(ctx, operation)?;
        ctx.finish(operation);
        Ok(())
    }
}

/// Builds `fragment Name on Type @directives { ... }`.
pub struct FragmentBuilder;

impl SyntaxNodeBuilder for FragmentBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let keyword = ctx.stream.peek()?;
        if !keyword.is_keyword("fragment") {
            return Err(TokenStream::unexpected("`fragment`", &keyword));
        }
        ctx.stream.consume()?;
        let fragment = ctx.open(parent, SyntaxNodeKind::Fragment, &keyword);

        let name = ctx.stream.expect_name("fragment name")?;
        if name.text == "on" {
            let mut error = SyntaxError::new(
                "fragment name cannot be `on`",
                name.span,
                SyntaxErrorKind::ReservedName {
                    name: name.text.to_string(),
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#FragmentName");
            return Err(error);
        }
        ctx.set_name(fragment, name.text);

        let on = ctx.stream.peek()?;
        if !on.is_keyword("on") {
            return Err(TokenStream::unexpected("`on`", &on));
        }
        ctx.stream.consume()?;
        let type_condition = ctx.stream.expect_name("type condition")?;
        ctx.set_literal(fragment, type_condition.text);

        ctx.build_directives(fragment)?;

        let next = ctx.stream.peek()?;
        if next.kind != TokenKind::CurlyBraceOpen {
            return Err(TokenStream::unexpected("`{`", &next));
        }
        SelectionSetBuilder.build(ctx, fragment)?;
        ctx.finish(fragment);
        Ok(())
    }
}
