use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::syntax::NodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::builders::BuildContext;
use crate::syntax::builders::SyntaxNodeBuilder;
use crate::syntax::builders::ValueBuilder;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;

/// Builds `( $var: Type = default @directives ... )`.
pub struct VariableCollectionBuilder;

impl SyntaxNodeBuilder for VariableCollectionBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let open = ctx.stream.expect(TokenKind::ParenOpen, "`(`")?;
        let collection = ctx.open(parent, SyntaxNodeKind::VariableCollection, &open);

        let mut count = 0usize;
        loop {
            let token = ctx.stream.peek()?;
            match token.kind {
                TokenKind::ParenClose if count > 0 => {
                    ctx.stream.consume()?;
                    break;
                },
                TokenKind::ParenClose => {
                    return Err(SyntaxError::new(
                        "variable definitions cannot be empty",
                        open.span.to(token.span),
                        SyntaxErrorKind::InvalidEmptyConstruct { construct: "()" },
                    ));
                },
                TokenKind::Eof => return Err(ctx.unterminated(&open, ")")),
                TokenKind::Dollar => VariableBuilder.build(ctx, collection)?,
                _ => return Err(TokenStream::unexpected("`$` or `)`", &token)),
            }
            count += 1;
        }
        ctx.finish(collection);
        Ok(())
    }
}

/// Builds one variable definition.
pub struct VariableBuilder;

impl SyntaxNodeBuilder for VariableBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let dollar = ctx.stream.expect(TokenKind::Dollar, "`$`")?;
        let variable = ctx.open(parent, SyntaxNodeKind::Variable, &dollar);
        let name = ctx.stream.expect_name("variable name")?;
        ctx.set_name(variable, name.text);
        ctx.stream.expect(TokenKind::Colon, "`:`")?;

        let type_start = ctx.stream.peek()?.span.start_inclusive;
        consume_type_expression(ctx)?;
        let type_end = ctx.stream.last_end();
        let source = ctx.tree.source();
        if let Some(type_text) = source.get(type_start.byte_offset()..type_end.byte_offset()) {
            ctx.set_literal(variable, type_text);
        }

        if ctx.stream.consume_if(TokenKind::Equals)?.is_some() {
            ctx.constant_values = true;
            let default = ValueBuilder.build(ctx, variable);
            ctx.constant_values = false;
            default?;
        }
        ctx.build_directives(variable)?;
        ctx.finish(variable);
        Ok(())
    }
}

/// Consumes `Name`, `[Type]` and either followed by `!`.
fn consume_type_expression(ctx: &mut BuildContext<'_>) -> Result<(), SyntaxError> {
    let token = ctx.stream.peek()?;
    match token.kind {
        TokenKind::Name | TokenKind::Null => {
            ctx.stream.consume()?;
        },
        TokenKind::SquareBracketOpen => {
            ctx.stream.consume()?;
            ctx.descend(token.span)?;
            consume_type_expression(ctx)?;
            let close = ctx.stream.peek()?;
            match close.kind {
                TokenKind::SquareBracketClose => {
                    ctx.stream.consume()?;
                },
                TokenKind::Eof => return Err(ctx.unterminated(&token, "]")),
                _ => return Err(TokenStream::unexpected("`]`", &close)),
            }
            ctx.ascend();
        },
        _ => return Err(TokenStream::unexpected("type", &token)),
    }
    ctx.stream.consume_if(TokenKind::Bang)?;
    Ok(())
}
