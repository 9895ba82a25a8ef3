use crate::schema::Field;
use crate::schema::InputField;
use crate::types::TypeExpression;
use indexmap::IndexMap;

/// A named type defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(ObjectType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
            Self::Interface(t) | Self::Object(t) => &t.name,
            Self::Scalar(t) => &t.name,
            Self::Union(t) => &t.name,
        }
    }

    pub fn kind(&self) -> GraphTypeKind {
        self.into()
    }

    /// Whether values of this type may be supplied as input (variables and
    /// arguments).
    pub fn is_input_kind(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    /// Whether selections against this type must stop (scalars and enums).
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Whether this type has fields that can be selected.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Selectable fields of a composite type. Unions only expose
    /// `__typename`.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) | Self::Object(t) => Some(&t.fields),
            Self::Union(t) => Some(&t.fields),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&ObjectType> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn inject_typename_field(&mut self) {
        let typename = || {
            Field::new("__typename", TypeExpression::named("String").non_null())
        };
        match self {
            Self::Interface(t) | Self::Object(t) => {
                if !t.fields.contains_key("__typename") {
                    t.add_field(typename());
                }
            },
            Self::Union(t) => {
                if !t.fields.contains_key("__typename") {
                    let mut field = typename();
                    field.parent_type = t.name.clone();
                    t.fields.insert(field.name.clone(), field);
                }
            },
            _ => (),
        }
    }
}

/// Similar to [`GraphType`] except without the corresponding type metadata.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphTypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&GraphType> for GraphTypeKind {
    fn from(value: &GraphType) -> Self {
        match value {
            GraphType::Enum(_) => GraphTypeKind::Enum,
            GraphType::InputObject(_) => GraphTypeKind::InputObject,
            GraphType::Interface(_) => GraphTypeKind::Interface,
            GraphType::Object(_) => GraphTypeKind::Object,
            GraphType::Scalar(_) => GraphTypeKind::Scalar,
            GraphType::Union(_) => GraphTypeKind::Union,
        }
    }
}
impl std::fmt::Display for GraphTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared shape of object and interface types.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
}
impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            interfaces: vec![],
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.interfaces.push(interface_name.into());
        self
    }

    pub(crate) fn add_field(&mut self, mut field: Field) {
        field.parent_type = self.name.clone();
        self.fields.insert(field.name.clone(), field);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Names of the interfaces this type declares that it implements.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface_name)
    }
}

/// Represents a [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) members: Vec<String>,
    pub(crate) fields: IndexMap<String, Field>,
}
impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: vec![],
            fields: IndexMap::new(),
        }
    }

    pub fn with_member(mut self, type_name: impl Into<String>) -> Self {
        self.members.push(type_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member type names, in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|name| name == type_name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) name: String,
}
impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![],
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, InputField>,
}
impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }
}
