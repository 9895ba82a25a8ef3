use crate::schema::ArgumentDefinition;
use crate::schema::DirectiveDefinition;
use crate::schema::DirectiveLocation;
use crate::schema::EnumType;
use crate::schema::Field;
use crate::schema::GraphType;
use crate::schema::InputField;
use crate::schema::InputObjectType;
use crate::schema::ObjectType;
use crate::schema::OperationKind;
use crate::schema::ScalarType;
use crate::schema::Schema;
use crate::schema::UnionType;
use crate::types::TypeExpression;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];
const BUILTIN_DIRECTIVES: [&str; 4] = ["deprecated", "include", "skip", "specifiedBy"];

/// Utility for building a [`Schema`], either programmatically or from SDL
/// text.
///
/// SDL fields annotated `@virtual` and arguments annotated `@source` or
/// `@internal` carry those flags into the built schema.
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: IndexMap<String, DirectiveDefinition>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    str_load_counter: u16,
    subscription_type: Option<String>,
    types: IndexMap<String, GraphType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let types = BUILTIN_SCALARS
            .iter()
            .map(|name| (name.to_string(), GraphType::Scalar(ScalarType::new(*name))))
            .collect();

        Self {
            directives: IndexMap::new(),
            query_type: None,
            mutation_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types,
        }
    }

    pub fn add_type(mut self, graph_type: GraphType) -> Result<Self> {
        self.insert_type(graph_type)?;
        Ok(self)
    }

    pub fn add_directive(mut self, directive: DirectiveDefinition) -> Result<Self> {
        self.insert_directive(directive)?;
        Ok(self)
    }

    /// Overrides the root type name for operations of the given kind. Without
    /// an override the `Query`, `Mutation` and `Subscription` object types
    /// are used when present.
    pub fn with_root_type(
        mut self,
        kind: OperationKind,
        type_name: impl Into<String>,
    ) -> Result<Self> {
        self.set_root_type(kind, type_name.into())?;
        Ok(self)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            SchemaBuildError::SchemaFileReadError {
                path: file_path.to_path_buf(),
                err: Box::new(err),
            }
        })?;
        self.load_str(Some(file_path.to_path_buf()), content.as_str())
    }

    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        let file_path = if let Some(file_path) = file_path {
            file_path
        } else {
            let ctr = self.str_load_counter;
            self.str_load_counter += 1;
            PathBuf::from(format!("str://{ctr}"))
        };

        let ast_doc = ast::parse_schema::<String>(content).map_err(|err| {
            SchemaBuildError::ParseError {
                file: file_path.clone(),
                err: err.to_string(),
            }
        })?;

        log::debug!(
            "loading {} schema definitions from `{}`",
            ast_doc.definitions.len(),
            file_path.display(),
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(def)?;
        }

        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();
        for graph_type in self.types.values_mut() {
            graph_type.inject_typename_field();
        }
        self.check_type_references()?;

        let query_type = self
            .resolve_root_type(self.query_type.clone(), OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_root_type(self.mutation_type.clone(), OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_root_type(self.subscription_type.clone(), OperationKind::Subscription)?;

        log::debug!(
            "built schema with {} types and {} directives",
            self.types.len(),
            self.directives.len(),
        );
        Ok(Schema {
            directives: self.directives,
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    fn resolve_root_type(
        &self,
        explicit: Option<String>,
        kind: OperationKind,
    ) -> Result<Option<String>> {
        let default_name = match kind {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        };
        match explicit {
            Some(type_name) => match self.types.get(&type_name) {
                Some(GraphType::Object(_)) => Ok(Some(type_name)),
                _ => Err(SchemaBuildError::InvalidRootOperationType {
                    operation: kind,
                    type_name,
                }),
            },
            None => match self.types.get(default_name) {
                Some(GraphType::Object(_)) => Ok(Some(default_name.to_string())),
                _ => Ok(None),
            },
        }
    }

    fn set_root_type(&mut self, kind: OperationKind, type_name: String) -> Result<()> {
        let slot = match kind {
            OperationKind::Query => &mut self.query_type,
            OperationKind::Mutation => &mut self.mutation_type,
            OperationKind::Subscription => &mut self.subscription_type,
        };
        if let Some(existing) = slot {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: kind,
                type_name1: existing.clone(),
                type_name2: type_name,
            });
        }
        *slot = Some(type_name);
        Ok(())
    }

    fn insert_type(&mut self, graph_type: GraphType) -> Result<()> {
        let type_name = graph_type.name().to_string();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name });
        }
        if self.types.contains_key(&type_name) {
            // Redeclaring a built-in scalar is harmless.
            if matches!(graph_type, GraphType::Scalar(_))
                && BUILTIN_SCALARS.contains(&type_name.as_str())
            {
                return Ok(());
            }
            return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
        }
        self.types.insert(type_name, graph_type);
        Ok(())
    }

    fn insert_directive(&mut self, directive: DirectiveDefinition) -> Result<()> {
        let directive_name = directive.name.clone();
        if BUILTIN_DIRECTIVES.contains(&directive_name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name });
        }
        if directive_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                directive_name,
            });
        }
        if self.directives.contains_key(&directive_name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name });
        }
        self.directives.insert(directive_name, directive);
        Ok(())
    }

    fn inject_missing_builtin_directives(&mut self) {
        let builtins = [
            DirectiveDefinition::builtin_conditional("skip"),
            DirectiveDefinition::builtin_conditional("include"),
            DirectiveDefinition::builtin_deprecated(),
            DirectiveDefinition::builtin_specified_by(),
        ];
        for directive in builtins {
            if !self.directives.contains_key(directive.name()) {
                self.directives.insert(directive.name.clone(), directive);
            }
        }
    }

    fn check_type_references(&self) -> Result<()> {
        let require = |type_name: &str, referenced_by: String| -> Result<&GraphType> {
            self.types.get(type_name).ok_or_else(|| SchemaBuildError::UndefinedTypeReference {
                type_name: type_name.to_string(),
                referenced_by,
            })
        };
        let require_input = |type_expr: &TypeExpression, referenced_by: String| -> Result<()> {
            let graph_type = require(type_expr.innermost_name(), referenced_by.clone())?;
            if !graph_type.is_input_kind() {
                return Err(SchemaBuildError::NonInputTypeUsedAsInput {
                    type_name: graph_type.name().to_string(),
                    referenced_by,
                });
            }
            Ok(())
        };

        for graph_type in self.types.values() {
            match graph_type {
                GraphType::Object(obj) | GraphType::Interface(obj) => {
                    for interface_name in obj.interfaces() {
                        match require(interface_name, obj.name.clone())? {
                            GraphType::Interface(_) => (),
                            _ => {
                                return Err(SchemaBuildError::ImplementsNonInterfaceType {
                                    type_name: obj.name.clone(),
                                    interface_name: interface_name.clone(),
                                });
                            },
                        }
                    }
                    for field in obj.fields.values() {
                        let field_path = format!("{}.{}", obj.name, field.name);
                        let return_type =
                            require(field.return_type(), field_path.clone())?;
                        if matches!(return_type, GraphType::InputObject(_)) {
                            return Err(SchemaBuildError::InputTypeUsedAsOutput {
                                type_name: return_type.name().to_string(),
                                referenced_by: field_path,
                            });
                        }
                        for arg in field.arguments.values() {
                            require_input(
                                &arg.type_expression,
                                format!("{field_path}({}:)", arg.name),
                            )?;
                        }
                    }
                },
                GraphType::Union(union_type) => {
                    for member in union_type.members() {
                        if !matches!(
                            require(member, union_type.name.clone())?,
                            GraphType::Object(_),
                        ) {
                            return Err(SchemaBuildError::InvalidUnionMember {
                                union_name: union_type.name.clone(),
                                member_name: member.clone(),
                            });
                        }
                    }
                },
                GraphType::InputObject(input_obj) => {
                    for field in input_obj.fields.values() {
                        require_input(
                            &field.type_expression,
                            format!("{}.{}", input_obj.name, field.name),
                        )?;
                    }
                },
                GraphType::Enum(_) | GraphType::Scalar(_) => (),
            }
        }

        for directive in self.directives.values() {
            for arg in directive.arguments.values() {
                require_input(
                    &arg.type_expression,
                    format!("@{}({}:)", directive.name, arg.name),
                )?;
            }
        }
        Ok(())
    }

    fn visit_ast_def(&mut self, def: ast::Definition<'_, String>) -> Result<()> {
        match def {
            ast::Definition::SchemaDefinition(schema_def) => {
                if let Some(type_name) = schema_def.query {
                    self.set_root_type(OperationKind::Query, type_name)?;
                }
                if let Some(type_name) = schema_def.mutation {
                    self.set_root_type(OperationKind::Mutation, type_name)?;
                }
                if let Some(type_name) = schema_def.subscription {
                    self.set_root_type(OperationKind::Subscription, type_name)?;
                }
                Ok(())
            },
            ast::Definition::TypeDefinition(type_def) => {
                let graph_type = graph_type_from_ast(type_def);
                self.insert_type(graph_type)
            },
            ast::Definition::TypeExtension(type_ext) => self.visit_ast_type_extension(type_ext),
            ast::Definition::DirectiveDefinition(directive_def) => {
                let mut directive = DirectiveDefinition::new(
                    directive_def.name,
                    directive_def
                        .locations
                        .iter()
                        .map(DirectiveLocation::from_ast)
                        .collect(),
                )
                .with_repeatable(directive_def.repeatable);
                for input_value in &directive_def.arguments {
                    directive = directive.with_argument(argument_from_ast(input_value));
                }
                self.insert_directive(directive)
            },
        }
    }

    fn visit_ast_type_extension(&mut self, ext: ast::TypeExtension<'_, String>) -> Result<()> {
        let type_name = match &ext {
            ast::TypeExtension::Scalar(e) => &e.name,
            ast::TypeExtension::Object(e) => &e.name,
            ast::TypeExtension::Interface(e) => &e.name,
            ast::TypeExtension::Union(e) => &e.name,
            ast::TypeExtension::Enum(e) => &e.name,
            ast::TypeExtension::InputObject(e) => &e.name,
        }
        .clone();

        let Some(existing) = self.types.get_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType { type_name });
        };

        match (existing, ext) {
            (GraphType::Scalar(_), ast::TypeExtension::Scalar(_)) => (),
            (GraphType::Object(obj), ast::TypeExtension::Object(e)) => {
                obj.interfaces.extend(e.implements_interfaces);
                for field in &e.fields {
                    obj.add_field(field_from_ast(field));
                }
            },
            (GraphType::Interface(obj), ast::TypeExtension::Interface(e)) => {
                for field in &e.fields {
                    obj.add_field(field_from_ast(field));
                }
            },
            (GraphType::Union(union_type), ast::TypeExtension::Union(e)) => {
                union_type.members.extend(e.types);
            },
            (GraphType::Enum(enum_type), ast::TypeExtension::Enum(e)) => {
                enum_type.values.extend(e.values.into_iter().map(|v| v.name));
            },
            (GraphType::InputObject(input_obj), ast::TypeExtension::InputObject(e)) => {
                for input_value in &e.fields {
                    let field = input_field_from_ast(input_value);
                    input_obj.fields.insert(field.name.clone(), field);
                }
            },
            _ => return Err(SchemaBuildError::InvalidExtensionType { type_name }),
        }
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn has_directive(directives: &[ast::Directive<'_, String>], name: &str) -> bool {
    directives.iter().any(|d| d.name == name)
}

fn graph_type_from_ast(type_def: ast::TypeDefinition<'_, String>) -> GraphType {
    match type_def {
        ast::TypeDefinition::Scalar(def) => GraphType::Scalar(ScalarType::new(def.name)),
        ast::TypeDefinition::Object(def) => {
            let mut obj = ObjectType::new(def.name);
            obj.interfaces = def.implements_interfaces;
            for field in &def.fields {
                obj.add_field(field_from_ast(field));
            }
            GraphType::Object(obj)
        },
        ast::TypeDefinition::Interface(def) => {
            let mut obj = ObjectType::new(def.name);
            for field in &def.fields {
                obj.add_field(field_from_ast(field));
            }
            GraphType::Interface(obj)
        },
        ast::TypeDefinition::Union(def) => {
            let mut union_type = UnionType::new(def.name);
            union_type.members = def.types;
            GraphType::Union(union_type)
        },
        ast::TypeDefinition::Enum(def) => {
            let mut enum_type = EnumType::new(def.name);
            enum_type.values = def.values.into_iter().map(|v| v.name).collect();
            GraphType::Enum(enum_type)
        },
        ast::TypeDefinition::InputObject(def) => {
            let mut input_obj = InputObjectType::new(def.name);
            for input_value in &def.fields {
                input_obj = input_obj.with_field(input_field_from_ast(input_value));
            }
            GraphType::InputObject(input_obj)
        },
    }
}

fn field_from_ast(field: &ast::Field<'_, String>) -> Field {
    let mut result = Field::new(field.name.clone(), TypeExpression::from_ast(&field.field_type))
        .with_virtual(has_directive(&field.directives, "virtual"));
    for input_value in &field.arguments {
        result = result.with_argument(argument_from_ast(input_value));
    }
    result
}

fn argument_from_ast(input_value: &ast::InputValue<'_, String>) -> ArgumentDefinition {
    ArgumentDefinition::new(
        input_value.name.clone(),
        TypeExpression::from_ast(&input_value.value_type),
    )
    .with_default(input_value.default_value.is_some())
    .with_source(has_directive(&input_value.directives, "source"))
    .with_internal(has_directive(&input_value.directives, "internal"))
}

fn input_field_from_ast(input_value: &ast::InputValue<'_, String>) -> InputField {
    InputField::new(
        input_value.name.clone(),
        TypeExpression::from_ast(&input_value.value_type),
    )
    .with_default(input_value.default_value.is_some())
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition { directive_name: String },

    #[error(
        "the {operation} root operation type was declared twice (`{type_name1}` and \
        `{type_name2}`)"
    )]
    DuplicateOperationDefinition {
        operation: OperationKind,
        type_name1: String,
        type_name2: String,
    },

    #[error("multiple types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition { type_name: String },

    #[error("attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType { type_name: String },

    #[error("`{type_name}` declares that it implements `{interface_name}`, which is not an interface")]
    ImplementsNonInterfaceType {
        type_name: String,
        interface_name: String,
    },

    #[error("input object type `{type_name}` cannot be the type of output field `{referenced_by}`")]
    InputTypeUsedAsOutput {
        type_name: String,
        referenced_by: String,
    },

    #[error("custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName { directive_name: String },

    #[error("type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName { type_name: String },

    #[error("attempted to extend `{type_name}` with an extension of a different kind of type")]
    InvalidExtensionType { type_name: String },

    #[error("the {operation} root operation type `{type_name}` is not an object type")]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("union `{union_name}` has member `{member_name}`, which is not an object type")]
    InvalidUnionMember {
        union_name: String,
        member_name: String,
    },

    #[error("attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("`{type_name}` is not an input type but is used as the type of `{referenced_by}`")]
    NonInputTypeUsedAsInput {
        type_name: String,
        referenced_by: String,
    },

    #[error("error parsing schema `{}`: {err}", file.display())]
    ParseError { file: PathBuf, err: String },

    #[error("attempted to redefine the built-in directive `@{directive_name}`")]
    RedefinitionOfBuiltinDirective { directive_name: String },

    #[error("failure while trying to read schema file `{}`", path.display())]
    SchemaFileReadError {
        path: PathBuf,
        #[source]
        err: Box<std::io::Error>,
    },

    #[error("`{referenced_by}` references undefined type `{type_name}`")]
    UndefinedTypeReference {
        type_name: String,
        referenced_by: String,
    },
}
