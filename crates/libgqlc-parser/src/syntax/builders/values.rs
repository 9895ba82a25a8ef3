use crate::SyntaxError;
use crate::syntax::NodeId;
use crate::syntax::ScalarValueKind;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::builders::BuildContext;
use crate::syntax::builders::InputItemBuilder;
use crate::syntax::builders::SyntaxNodeBuilder;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;

/// Dispatches to the builder for the value at the head of the stream.
pub struct ValueBuilder;

impl SyntaxNodeBuilder for ValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let token = ctx.stream.peek()?;
        match token.kind {
            TokenKind::Name => match token.text {
                "true" | "false" => ScalarValueBuilder.build(ctx, parent),
                _ => EnumValueBuilder.build(ctx, parent),
            },
            TokenKind::Null => NullValueBuilder.build(ctx, parent),
            TokenKind::StringValue | TokenKind::IntValue | TokenKind::FloatValue => {
                ScalarValueBuilder.build(ctx, parent)
            },
            TokenKind::CurlyBraceOpen => ComplexValueBuilder.build(ctx, parent),
            TokenKind::SquareBracketOpen => ListValueBuilder.build(ctx, parent),
            TokenKind::Dollar if ctx.constant_values => {
                Err(TokenStream::unexpected("constant value", &token))
            },
            TokenKind::Dollar => VariableValueBuilder.build(ctx, parent),
            _ => Err(TokenStream::unexpected("<value>", &token)),
        }
    }
}

/// Builds string, integer, float and boolean literals.
pub struct ScalarValueBuilder;

impl SyntaxNodeBuilder for ScalarValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let token = ctx.stream.peek()?;
        let scalar_kind = match token.kind {
            TokenKind::IntValue => ScalarValueKind::Int,
            TokenKind::FloatValue => ScalarValueKind::Float,
            TokenKind::StringValue => ScalarValueKind::String,
            TokenKind::Name if matches!(token.text, "true" | "false") => {
                ScalarValueKind::Boolean
            },
            _ => return Err(TokenStream::unexpected("scalar value", &token)),
        };
        ctx.stream.consume()?;
        let node = ctx.open(parent, SyntaxNodeKind::ScalarValue(scalar_kind), &token);
        ctx.set_literal(node, token.text);
        Ok(())
    }
}

pub struct EnumValueBuilder;

impl SyntaxNodeBuilder for EnumValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let token = ctx.stream.expect(TokenKind::Name, "enum value")?;
        let node = ctx.open(parent, SyntaxNodeKind::EnumValue, &token);
        ctx.set_name(node, token.text);
        ctx.set_literal(node, token.text);
        Ok(())
    }
}

pub struct NullValueBuilder;

impl SyntaxNodeBuilder for NullValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let token = ctx.stream.expect(TokenKind::Null, "`null`")?;
        let node = ctx.open(parent, SyntaxNodeKind::NullValue, &token);
        ctx.set_literal(node, token.text);
        Ok(())
    }
}

/// Builds `$name`.
pub struct VariableValueBuilder;

impl SyntaxNodeBuilder for VariableValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let dollar = ctx.stream.expect(TokenKind::Dollar, "`$`")?;
        let node = ctx.open(parent, SyntaxNodeKind::VariableValue, &dollar);
        let name = ctx.stream.expect_name("variable name")?;
        ctx.set_name(node, name.text);
        ctx.finish(node);
        Ok(())
    }
}

/// Builds `[value*]`.
pub struct ListValueBuilder;

impl SyntaxNodeBuilder for ListValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let open = ctx.stream.expect(TokenKind::SquareBracketOpen, "`[`")?;
        ctx.descend(open.span)?;
        let list = ctx.open(parent, SyntaxNodeKind::ListValue, &open);
        loop {
            match ctx.stream.peek_kind()? {
                TokenKind::SquareBracketClose => {
                    ctx.stream.consume()?;
                    break;
                },
                TokenKind::Eof => return Err(ctx.unterminated(&open, "]")),
                _ => ValueBuilder.build(ctx, list)?,
            }
        }
        ctx.finish(list);
        ctx.ascend();
        Ok(())
    }
}

/// Builds `{ name: value* }`.
pub struct ComplexValueBuilder;

impl SyntaxNodeBuilder for ComplexValueBuilder {
    fn build<'src>(
        &self,
        ctx: &mut BuildContext<'src>,
        parent: NodeId,
    ) -> Result<(), SyntaxError> {
        let open = ctx.stream.expect(TokenKind::CurlyBraceOpen, "`{`")?;
        ctx.descend(open.span)?;
        let complex = ctx.open(parent, SyntaxNodeKind::ComplexValue, &open);
        loop {
            let token = ctx.stream.peek()?;
            match token.kind {
                TokenKind::CurlyBraceClose => {
                    ctx.stream.consume()?;
                    break;
                },
                TokenKind::Eof => return Err(ctx.unterminated(&open, "}")),
                TokenKind::Name | TokenKind::Null => InputItemBuilder.build(ctx, complex)?,
                _ => return Err(TokenStream::unexpected("field name or `}`", &token)),
            }
        }
        ctx.finish(complex);
        ctx.ascend();
        Ok(())
    }
}
