mod directive_definition;
mod field;
mod graph_type;
mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use field::ArgumentDefinition;
pub use field::Field;
pub use field::InputField;
pub use graph_type::EnumType;
pub use graph_type::GraphType;
pub use graph_type::GraphTypeKind;
pub use graph_type::InputObjectType;
pub use graph_type::ObjectType;
pub use graph_type::ScalarType;
pub use graph_type::UnionType;
pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
