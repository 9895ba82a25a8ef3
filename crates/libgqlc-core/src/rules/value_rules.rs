use crate::document::PartKind;
use crate::document::SuppliedValue;
use crate::document::SuppliedValuePart;
use crate::rules::PartContext;
use crate::rules::PartRule;
use crate::rules::RuleMessages;
use crate::rules::anchors;
use crate::schema::GraphType;
use crate::schema::InputObjectType;
use libgqlc_parser::syntax::ScalarValueKind;
use std::collections::HashSet;

pub const VALUES_OF_CORRECT_TYPE: PartRule = PartRule {
    rule_number: "5.6.1",
    anchor: anchors::VALUES_OF_CORRECT_TYPE,
    applies: is_typed_value,
    execute: check_value_type,
};

pub const INPUT_OBJECT_FIELD_NAMES: PartRule = PartRule {
    rule_number: "5.6.2",
    anchor: anchors::INPUT_OBJECT_FIELD_NAMES,
    applies: is_undefined_input_field,
    execute: check_input_object_field_name,
};

pub const INPUT_OBJECT_FIELD_UNIQUENESS: PartRule = PartRule {
    rule_number: "5.6.3",
    anchor: anchors::INPUT_OBJECT_FIELD_UNIQUENESS,
    applies: is_complex_value,
    execute: check_input_object_field_uniqueness,
};

pub const INPUT_OBJECT_REQUIRED_FIELDS: PartRule = PartRule {
    rule_number: "5.6.4",
    anchor: anchors::INPUT_OBJECT_REQUIRED_FIELDS,
    applies: is_complex_value,
    execute: check_input_object_required_fields,
};

fn is_typed_value(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part
        .as_value()
        .is_some_and(|value| value.expected_type().is_some())
}

fn is_complex_value(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part
        .as_value()
        .is_some_and(|value| *value.value() == SuppliedValue::Complex)
}

fn is_undefined_input_field(ctx: &PartContext<'_, '_>) -> bool {
    ctx.part.as_argument().is_some_and(|argument| !argument.is_defined())
        && ctx.parent().and_then(|parent| parent.as_value()).is_some()
}

/// The input object a complex value is written against, when known.
fn input_object_of<'schema>(
    ctx: &PartContext<'_, 'schema>,
    value: &SuppliedValuePart,
) -> Option<&'schema InputObjectType> {
    value
        .expected_type()
        .and_then(|expected| ctx.schema.type_by_name(expected.innermost_name()))
        .and_then(GraphType::as_input_object)
}

fn check_value_type(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(part) = ctx.part.as_value() else {
        return;
    };
    let Some(expected) = part.expected_type() else {
        return;
    };
    let value = part.value();
    let mismatch = || {
        format!(
            "value `{}` cannot be supplied where `{expected}` is expected",
            value.describe(),
        )
    };

    match value {
        // Variable usages are checked against their declarations.
        SuppliedValue::VariableRef(_) => (),
        SuppliedValue::Null => {
            if !expected.is_nullable() {
                messages.error(mismatch(), ctx.position());
            }
        },
        SuppliedValue::List => {
            if !expected.is_list() {
                messages.error(mismatch(), ctx.position());
            }
        },
        SuppliedValue::Scalar { .. } | SuppliedValue::Enum(_) | SuppliedValue::Complex => {
            let Some(graph_type) = ctx.schema.type_by_name(expected.innermost_name()) else {
                return;
            };
            if !accepts(graph_type, value) {
                messages.error(mismatch(), ctx.position());
            }
        },
    }
}

/// Whether a non-null, non-list literal is a valid input for `graph_type`.
fn accepts(graph_type: &GraphType, value: &SuppliedValue) -> bool {
    match (graph_type, value) {
        (GraphType::Scalar(scalar), SuppliedValue::Scalar { kind, .. }) => {
            match (scalar.name(), kind) {
                ("Int", ScalarValueKind::Int) => true,
                ("Float", ScalarValueKind::Int | ScalarValueKind::Float) => true,
                ("String", ScalarValueKind::String) => true,
                ("Boolean", ScalarValueKind::Boolean) => true,
                ("ID", ScalarValueKind::Int | ScalarValueKind::String) => true,
                ("Int" | "Float" | "String" | "Boolean" | "ID", _) => false,
                _ => true,
            }
        },
        // Custom scalars define their own literal forms.
        (GraphType::Scalar(scalar), _) => {
            !matches!(scalar.name(), "Int" | "Float" | "String" | "Boolean" | "ID")
        },
        (GraphType::Enum(enum_type), SuppliedValue::Enum(name)) => enum_type.has_value(name),
        (GraphType::InputObject(_), SuppliedValue::Complex) => true,
        (GraphType::Enum(_) | GraphType::InputObject(_), _) => false,
        // Output types are rejected where the variable or argument is
        // declared.
        _ => true,
    }
}

fn check_input_object_field_name(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let (Some(argument), Some(value)) = (
        ctx.part.as_argument(),
        ctx.parent().and_then(|parent| parent.as_value()),
    ) else {
        return;
    };
    let Some(input_object) = input_object_of(ctx, value) else {
        return;
    };
    messages.error(
        format!(
            "input object `{}` has no field `{}`",
            input_object.name(),
            argument.name(),
        ),
        ctx.position(),
    );
}

fn check_input_object_field_uniqueness(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let mut seen = HashSet::new();
    for &child in ctx.part.children() {
        let part = ctx.document.part(child);
        let Some(field) = part.as_argument() else {
            continue;
        };
        if !seen.insert(field.name()) {
            messages.error(
                format!("input field `{}` is supplied more than once", field.name()),
                part.position(),
            );
        }
    }
}

fn check_input_object_required_fields(ctx: &PartContext<'_, '_>, messages: &mut RuleMessages<'_>) {
    let Some(input_object) = ctx.part.as_value().and_then(|value| input_object_of(ctx, value))
    else {
        return;
    };
    let supplied: HashSet<&str> = ctx
        .part
        .children()
        .iter()
        .filter_map(|&child| match ctx.document.part(child).kind() {
            PartKind::InputArgument(field) => Some(field.name()),
            _ => None,
        })
        .collect();
    for field in input_object.fields().values() {
        if field.is_required() && !supplied.contains(field.name()) {
            messages.error(
                format!(
                    "input object `{}` requires field `{}` of type `{}`",
                    input_object.name(),
                    field.name(),
                    field.type_expression(),
                ),
                ctx.position(),
            );
        }
    }
}
