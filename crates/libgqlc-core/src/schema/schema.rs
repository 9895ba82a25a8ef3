use crate::schema::DirectiveDefinition;
use crate::schema::Field;
use crate::schema::GraphType;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;

/// A read-only, fully resolved GraphQL schema.
///
/// The compiler only ever queries a [`Schema`]; it can be shared across
/// threads and compiled against concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, DirectiveDefinition>,
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// All types in this schema, including built-in scalars.
    pub fn all_types(&self) -> &IndexMap<String, GraphType> {
        &self.types
    }

    /// All directives in this schema, including `@skip`, `@include`,
    /// `@deprecated` and `@specifiedBy`.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directives
    }

    pub fn type_by_name(&self, name: &str) -> Option<&GraphType> {
        self.types.get(name)
    }

    /// Looks up `field_name` on the composite type named `type_name`.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.type_by_name(type_name)?.field(field_name)
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    /// The root type for operations of the given kind, if the schema defines
    /// one.
    pub fn root_type(&self, kind: OperationKind) -> Option<&GraphType> {
        let name = match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.type_by_name(name)
    }

    pub fn query_type(&self) -> Option<&GraphType> {
        self.root_type(OperationKind::Query)
    }

    pub fn mutation_type(&self) -> Option<&GraphType> {
        self.root_type(OperationKind::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&GraphType> {
        self.root_type(OperationKind::Subscription)
    }

    /// The concrete object types a value of the named type may have at
    /// runtime.
    ///
    /// An object type expands to itself, a union to its members and an
    /// interface to every object type implementing it. Leaf and input types
    /// expand to nothing.
    pub fn expand_abstract_type(&self, name: &str) -> Vec<&GraphType> {
        match self.type_by_name(name) {
            Some(object @ GraphType::Object(_)) => vec![object],
            Some(GraphType::Union(union_type)) => union_type
                .members()
                .iter()
                .filter_map(|member| self.type_by_name(member))
                .collect(),
            Some(GraphType::Interface(_)) => self
                .types
                .values()
                .filter(|t| matches!(t, GraphType::Object(obj) if obj.implements(name)))
                .collect(),
            _ => vec![],
        }
    }

    /// Whether some concrete object type could satisfy both named types.
    pub fn types_overlap(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        let a_types = self.expand_abstract_type(a);
        self.expand_abstract_type(b)
            .iter()
            .any(|t| a_types.iter().any(|other| other.name() == t.name()))
    }
}
