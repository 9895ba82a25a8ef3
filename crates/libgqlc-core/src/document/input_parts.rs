use crate::document::PartId;
use crate::schema::ArgumentDefinition;
use crate::schema::InputField;
use crate::types::TypeExpression;
use libgqlc_parser::syntax::ScalarValueKind;
use std::cell::Cell;

/// What an [`InputArgumentPart`] was bound to.
#[derive(Clone, Copy, Debug)]
pub enum ArgumentTarget<'schema> {
    /// An argument of a field or directive.
    Argument(&'schema ArgumentDefinition),
    /// A field of an input object, supplied inside a `{ ... }` value.
    InputField(&'schema InputField),
    Undefined,
}

/// `name: value`, either an argument or a field of a complex value.
#[derive(Clone, Debug)]
pub struct InputArgumentPart<'schema> {
    pub(crate) name: String,
    pub(crate) target: ArgumentTarget<'schema>,
    pub(crate) value: Option<PartId>,
}
impl<'schema> InputArgumentPart<'schema> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> ArgumentTarget<'schema> {
        self.target
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self.target, ArgumentTarget::Undefined)
    }

    pub fn expected_type(&self) -> Option<&'schema TypeExpression> {
        match self.target {
            ArgumentTarget::Argument(arg) => Some(arg.type_expression()),
            ArgumentTarget::InputField(field) => Some(field.type_expression()),
            ArgumentTarget::Undefined => None,
        }
    }

    pub fn has_default(&self) -> bool {
        match self.target {
            ArgumentTarget::Argument(arg) => arg.has_default(),
            ArgumentTarget::InputField(field) => field.has_default(),
            ArgumentTarget::Undefined => false,
        }
    }

    pub fn value(&self) -> Option<PartId> {
        self.value
    }
}

/// A `$name: Type = default` declaration.
#[derive(Clone, Debug)]
pub struct VariablePart {
    pub(crate) name: String,
    pub(crate) raw_type: String,
    pub(crate) type_expression: Option<TypeExpression>,
    pub(crate) default_value: Option<PartId>,
    pub(crate) referenced: Cell<bool>,
}
impl VariablePart {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type exactly as written.
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    /// Absent when [`Self::raw_type()`] could not be parsed.
    pub fn type_expression(&self) -> Option<&TypeExpression> {
        self.type_expression.as_ref()
    }

    pub fn default_value(&self) -> Option<PartId> {
        self.default_value
    }

    pub fn is_referenced(&self) -> bool {
        self.referenced.get()
    }

    pub(crate) fn mark_referenced(&self) {
        self.referenced.set(true);
    }
}

/// A literal or variable reference written in the document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SuppliedValue {
    Scalar {
        kind: ScalarValueKind,
        literal: String,
    },
    Enum(String),
    Null,
    /// Items are the child parts.
    List,
    /// Fields are the child [`InputArgumentPart`]s.
    Complex,
    VariableRef(String),
}
impl SuppliedValue {
    /// Renders the value for messages; lists and objects are abbreviated.
    pub fn describe(&self) -> String {
        match self {
            Self::Scalar { literal, .. } => literal.clone(),
            Self::Enum(name) => name.clone(),
            Self::Null => "null".to_string(),
            Self::List => "[...]".to_string(),
            Self::Complex => "{...}".to_string(),
            Self::VariableRef(name) => format!("${name}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SuppliedValuePart {
    pub(crate) value: SuppliedValue,
    pub(crate) expected_type: Option<TypeExpression>,
    pub(crate) location_has_default: bool,
}
impl SuppliedValuePart {
    pub fn value(&self) -> &SuppliedValue {
        &self.value
    }

    /// The type this value must satisfy, when known.
    ///
    /// Non-list values written where a list is expected are checked against
    /// the list's item type.
    pub fn expected_type(&self) -> Option<&TypeExpression> {
        self.expected_type.as_ref()
    }

    /// Whether the argument or input field receiving this value declares a
    /// default.
    pub fn location_has_default(&self) -> bool {
        self.location_has_default
    }
}
