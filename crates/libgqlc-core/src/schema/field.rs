use crate::types::TypeExpression;
use indexmap::IndexMap;

/// A field declared on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) parent_type: String,
    pub(crate) type_expression: TypeExpression,
    pub(crate) arguments: IndexMap<String, ArgumentDefinition>,
    pub(crate) is_virtual: bool,
}

impl Field {
    /// Creates a field. Its parent type is assigned when the field is added
    /// to an [`ObjectType`](crate::schema::ObjectType).
    pub fn new(name: impl Into<String>, type_expression: TypeExpression) -> Self {
        Self {
            name: name.into(),
            parent_type: String::new(),
            type_expression,
            arguments: IndexMap::new(),
            is_virtual: false,
        }
    }

    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    /// Marks this field as a virtual path segment: it groups other fields but
    /// resolves nothing itself.
    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        self.is_virtual = is_virtual;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the type that declares this field.
    pub fn parent_type(&self) -> &str {
        &self.parent_type
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }

    /// The name of the graph type this field resolves to.
    pub fn return_type(&self) -> &str {
        self.type_expression.innermost_name()
    }

    pub fn arguments(&self) -> &IndexMap<String, ArgumentDefinition> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.get(name)
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn is_typename(&self) -> bool {
        self.name == "__typename"
    }
}

/// An argument accepted by a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub(crate) name: String,
    pub(crate) type_expression: TypeExpression,
    pub(crate) has_default: bool,
    pub(crate) is_source: bool,
    pub(crate) is_internal: bool,
}

impl ArgumentDefinition {
    pub fn new(name: impl Into<String>, type_expression: TypeExpression) -> Self {
        Self {
            name: name.into(),
            type_expression,
            has_default: false,
            is_source: false,
            is_internal: false,
        }
    }

    pub fn with_default(mut self, has_default: bool) -> Self {
        self.has_default = has_default;
        self
    }

    /// Source arguments receive the parent object rather than a value from
    /// the document.
    pub fn with_source(mut self, is_source: bool) -> Self {
        self.is_source = is_source;
        self
    }

    /// Internal arguments are supplied by the server, never by the document.
    pub fn with_internal(mut self, is_internal: bool) -> Self {
        self.is_internal = is_internal;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn is_source(&self) -> bool {
        self.is_source
    }

    pub fn is_internal(&self) -> bool {
        self.is_internal
    }

    /// Whether a document must supply this argument.
    pub fn is_required(&self) -> bool {
        !self.is_source
            && !self.is_internal
            && !self.has_default
            && !self.type_expression.is_nullable()
    }
}

/// A field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) name: String,
    pub(crate) type_expression: TypeExpression,
    pub(crate) has_default: bool,
}

impl InputField {
    pub fn new(name: impl Into<String>, type_expression: TypeExpression) -> Self {
        Self {
            name: name.into(),
            type_expression,
            has_default: false,
        }
    }

    pub fn with_default(mut self, has_default: bool) -> Self {
        self.has_default = has_default;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn is_required(&self) -> bool {
        !self.has_default && !self.type_expression.is_nullable()
    }
}
