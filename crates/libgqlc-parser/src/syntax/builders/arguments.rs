use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::builders::BuildContext;
use crate::syntax::builders::SyntaxNodeBuilder;
use crate::syntax::builders::ValueBuilder;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;

/// Builds a parenthesized argument list. `()` is rejected.
pub struct InputItemCollectionBuilder;

impl SyntaxNodeBuilder for InputItemCollectionBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let open = ctx.stream.expect(TokenKind::ParenOpen, "`(`")?;
        let first = ctx.stream.peek()?;
        if first.kind == TokenKind::ParenClose {
            let mut error = SyntaxError::new(
                "argument list cannot be empty",
                open.span.to(first.span),
                SyntaxErrorKind::InvalidEmptyConstruct { construct: "()" },
            );
            error.add_help("remove the parentheses or supply at least one argument");
            return Err(error);
        }

        let collection = ctx.open(parent, SyntaxNodeKind::InputItemCollection, &open);
        loop {
            let token = ctx.stream.peek()?;
            match token.kind {
                TokenKind::ParenClose => {
                    ctx.stream.consume()?;
                    break;
                },
                TokenKind::Eof => return Err(ctx.unterminated(&open, ")")),
                TokenKind::Name | TokenKind::Null => InputItemBuilder.build(ctx, collection)?,
                _ => return Err(TokenStream::unexpected("argument name or `)`", &token)),
            }
        }
        ctx.finish(collection);
        Ok(())
    }
}

/// Builds `name: value`, used for arguments and complex-value fields.
pub struct InputItemBuilder;

impl SyntaxNodeBuilder for InputItemBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let name = ctx.stream.expect_name("name")?;
        let item = ctx.open(parent, SyntaxNodeKind::InputItem, &name);
        ctx.set_name(item, name.text);
        ctx.stream.expect(TokenKind::Colon, "`:`")?;
        ValueBuilder.build(ctx, item)?;
        ctx.finish(item);
        Ok(())
    }
}

/// Builds `@name(args)`.
pub struct DirectiveBuilder;

impl SyntaxNodeBuilder for DirectiveBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let at = ctx.stream.expect(TokenKind::At, "`@`")?;
        let directive = ctx.open(parent, SyntaxNodeKind::Directive, &at);
        let name = ctx.stream.expect_name("directive name")?;
        ctx.set_name(directive, name.text);
        if ctx.stream.at(TokenKind::ParenOpen)? {
            InputItemCollectionBuilder.build(ctx, directive)?;
        }
        ctx.finish(directive);
        Ok(())
    }
}
