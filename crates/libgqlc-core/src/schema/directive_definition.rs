use crate::schema::ArgumentDefinition;
use crate::types::TypeExpression;
use indexmap::IndexMap;

/// Where a directive may be applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub(crate) fn from_ast(location: &graphql_parser::schema::DirectiveLocation) -> Self {
        use graphql_parser::schema::DirectiveLocation as Ast;
        match location {
            Ast::Query => Self::Query,
            Ast::Mutation => Self::Mutation,
            Ast::Subscription => Self::Subscription,
            Ast::Field => Self::Field,
            Ast::FragmentDefinition => Self::FragmentDefinition,
            Ast::FragmentSpread => Self::FragmentSpread,
            Ast::InlineFragment => Self::InlineFragment,
            Ast::VariableDefinition => Self::VariableDefinition,
            Ast::Schema => Self::Schema,
            Ast::Scalar => Self::Scalar,
            Ast::Object => Self::Object,
            Ast::FieldDefinition => Self::FieldDefinition,
            Ast::ArgumentDefinition => Self::ArgumentDefinition,
            Ast::Interface => Self::Interface,
            Ast::Union => Self::Union,
            Ast::Enum => Self::Enum,
            Ast::EnumValue => Self::EnumValue,
            Ast::InputObject => Self::InputObject,
            Ast::InputFieldDefinition => Self::InputFieldDefinition,
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive known to the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) name: String,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) arguments: IndexMap<String, ArgumentDefinition>,
    pub(crate) repeatable: bool,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>, locations: Vec<DirectiveLocation>) -> Self {
        Self {
            name: name.into(),
            locations,
            arguments: IndexMap::new(),
            repeatable: false,
        }
    }

    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    pub fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// `@skip(if: Boolean!)` or `@include(if: Boolean!)`.
    pub(crate) fn builtin_conditional(name: &str) -> Self {
        Self::new(name, vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ])
        .with_argument(ArgumentDefinition::new(
            "if",
            TypeExpression::named("Boolean").non_null(),
        ))
    }

    pub(crate) fn builtin_deprecated() -> Self {
        Self::new("deprecated", vec![
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::ArgumentDefinition,
            DirectiveLocation::InputFieldDefinition,
            DirectiveLocation::EnumValue,
        ])
        .with_argument(
            ArgumentDefinition::new("reason", TypeExpression::named("String"))
                .with_default(true),
        )
    }

    pub(crate) fn builtin_specified_by() -> Self {
        Self::new("specifiedBy", vec![DirectiveLocation::Scalar]).with_argument(
            ArgumentDefinition::new("url", TypeExpression::named("String").non_null()),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn is_valid_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn arguments(&self) -> &IndexMap<String, ArgumentDefinition> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.get(name)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }
}
