use crate::construction::ConstructionContext;
use crate::rules::ConstructionRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use crate::schema::GraphType;
use crate::schema::OperationKind;
use libgqlc_parser::syntax::SyntaxNodeKind;

pub const OPERATION_ROOT_TYPE_EXISTS: ConstructionRule = ConstructionRule {
    rule_number: "5.2.3",
    anchor: anchors::ROOT_OPERATION_TYPES,
    applies: is_operation,
    execute: check_operation_root_type,
};

pub const FIELD_EXISTS: ConstructionRule = ConstructionRule {
    rule_number: "5.3.1",
    anchor: anchors::FIELD_SELECTIONS,
    applies: is_field,
    execute: check_field_exists,
};

pub const INLINE_FRAGMENT_TYPE_EXISTS: ConstructionRule = ConstructionRule {
    rule_number: "5.5.1.2",
    anchor: anchors::FRAGMENT_SPREAD_TYPE_EXISTENCE,
    applies: is_typed_inline_fragment,
    execute: check_inline_fragment_type,
};

fn is_operation(ctx: &ConstructionContext<'_, '_, '_>) -> bool {
    ctx.node().kind == SyntaxNodeKind::Operation
}

fn is_field(ctx: &ConstructionContext<'_, '_, '_>) -> bool {
    ctx.node().kind == SyntaxNodeKind::Field
}

fn is_typed_inline_fragment(ctx: &ConstructionContext<'_, '_, '_>) -> bool {
    let node = ctx.node();
    node.kind == SyntaxNodeKind::InlineFragment && node.literal.is_some()
}

fn check_operation_root_type(
    ctx: &ConstructionContext<'_, '_, '_>,
    messages: &mut RuleMessages<'_>,
) -> bool {
    let kind = match ctx.node().literal {
        None => OperationKind::Query,
        Some(keyword) => match OperationKind::from_keyword(keyword) {
            Some(kind) => kind,
            None => return true,
        },
    };
    if ctx.schema().root_type(kind).is_some() {
        return true;
    }
    messages.error(
        format!("the schema does not define a root type for {kind} operations"),
        ctx.position(),
    );
    false
}

fn check_field_exists(
    ctx: &ConstructionContext<'_, '_, '_>,
    messages: &mut RuleMessages<'_>,
) -> bool {
    let (Some(scoped_type), Some(name)) = (ctx.scoped_type(), ctx.node().name) else {
        return true;
    };
    if scoped_type.field(name).is_some() {
        return true;
    }
    let message = match scoped_type {
        GraphType::Union(union_type) => format!(
            "fields cannot be selected directly from union `{}`; select `{name}` within an \
             inline fragment on one of its members",
            union_type.name(),
        ),
        _ => format!(
            "field `{name}` does not exist on {} `{}`",
            scoped_type.kind(),
            scoped_type.name(),
        ),
    };
    messages.error(message, ctx.position());
    false
}

fn check_inline_fragment_type(
    ctx: &ConstructionContext<'_, '_, '_>,
    messages: &mut RuleMessages<'_>,
) -> bool {
    let Some(type_condition) = ctx.node().literal else {
        return true;
    };
    if ctx.schema().type_by_name(type_condition).is_some() {
        return true;
    }
    messages.error(
        format!("inline fragment targets unknown type `{type_condition}`"),
        ctx.position(),
    );
    false
}
