use crate::SyntaxError;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::builders::BuildContext;
use crate::syntax::builders::InputItemCollectionBuilder;
use crate::syntax::builders::SyntaxNodeBuilder;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;

const SELECTION_EXPECTED: &str = "field, `...` or `}`";

/// Builds `{ selection* }`.
///
/// An empty `{}` is consumed without appending a node, so consumers can tell
/// a field with no selection set apart from one with selections.
pub struct SelectionSetBuilder;

impl SyntaxNodeBuilder for SelectionSetBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let open = ctx.stream.expect(TokenKind::CurlyBraceOpen, "`{`")?;
        if ctx.stream.consume_if(TokenKind::CurlyBraceClose)?.is_some() {
            return Ok(());
        }

        ctx.descend(open.span)?;
        let selection_set = ctx.open(parent, SyntaxNodeKind::SelectionSet, &open);
        loop {
            let token = ctx.stream.peek()?;
            match token.kind {
                TokenKind::CurlyBraceClose => {
                    ctx.stream.consume()?;
                    break;
                },
                TokenKind::Eof => return Err(ctx.unterminated(&open, "}")),
                TokenKind::Name | TokenKind::Null => FieldBuilder.build(ctx, selection_set)?,
                TokenKind::Ellipsis => {
                    let after = ctx.stream.peek_nth(1)?;
                    let is_spread = matches!(after.kind, TokenKind::Name | TokenKind::Null)
                        && after.text != "on";
                    if is_spread {
                        FragmentSpreadBuilder.build(ctx, selection_set)?;
                    } else {
                        InlineFragmentBuilder.build(ctx, selection_set)?;
                    }
                },
                _ => return Err(TokenStream::unexpected(SELECTION_EXPECTED, &token)),
            }
        }
        ctx.finish(selection_set);
        ctx.ascend();
        Ok(())
    }
}

/// Builds `alias: name(args) @directives { ... }`.
pub struct FieldBuilder;

impl SyntaxNodeBuilder for FieldBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let first = ctx.stream.expect_name("field name")?;
        let field = ctx.open(parent, SyntaxNodeKind::Field, &first);

        if ctx.stream.consume_if(TokenKind::Colon)?.is_some() {
            let name = ctx.stream.expect_name("field name")?;
            ctx.set_alias(field, first.text);
            ctx.set_name(field, name.text);
        } else {
            ctx.set_name(field, first.text);
        }

        if ctx.stream.at(TokenKind::ParenOpen)? {
            InputItemCollectionBuilder.build(ctx, field)?;
        }
        ctx.build_directives(field)?;
        if ctx.stream.at(TokenKind::CurlyBraceOpen)? {
            SelectionSetBuilder.build(ctx, field)?;
        }
        ctx.finish(field);
        Ok(())
    }
}

/// Builds `...FragmentName @directives`.
pub struct FragmentSpreadBuilder;

impl SyntaxNodeBuilder for FragmentSpreadBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let ellipsis = ctx.stream.expect(TokenKind::Ellipsis, "`...`")?;
        let spread = ctx.open(parent, SyntaxNodeKind::FragmentSpread, &ellipsis);
        let name = ctx.stream.expect_name("fragment name")?;
        ctx.set_name(spread, name.text);
        ctx.build_directives(spread)?;
        ctx.finish(spread);
        Ok(())
    }
}

/// Builds `... on Type @directives { ... }` with an optional type condition.
pub struct InlineFragmentBuilder;

impl SyntaxNodeBuilder for InlineFragmentBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let ellipsis = ctx.stream.expect(TokenKind::Ellipsis, "`...`")?;
        let inline = ctx.open(parent, SyntaxNodeKind::InlineFragment, &ellipsis);

        if ctx.stream.at_keyword("on")? {
            ctx.stream.consume()?;
            let type_condition = ctx.stream.expect_name("type condition")?;
            ctx.set_literal(inline, type_condition.text);
        }
        ctx.build_directives(inline)?;

        let next = ctx.stream.peek()?;
        if next.kind != TokenKind::CurlyBraceOpen {
            return Err(TokenStream::unexpected("`{`", &next));
        }
        SelectionSetBuilder.build(ctx, inline)?;
        ctx.finish(inline);
        Ok(())
    }
}
