use graphql_parser::schema::Type as AstType;

/// The declared type of a field, argument, input field or variable, e.g.
/// `[ID!]!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExpression {
    List {
        inner: Box<TypeExpression>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}

/// A variable type expression that could not be parsed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("invalid type expression `{text}`: {reason}")]
pub struct TypeExpressionParseError {
    pub text: String,
    pub reason: &'static str,
}

impl TypeExpression {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            nullable: true,
        }
    }

    pub fn list(inner: TypeExpression) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable: true,
        }
    }

    /// This type expression wrapped in `!`.
    pub fn non_null(self) -> Self {
        self.with_nullability(false)
    }

    /// This type expression with any outer `!` removed.
    pub fn nullable(self) -> Self {
        self.with_nullability(true)
    }

    fn with_nullability(self, nullable: bool) -> Self {
        match self {
            Self::List { inner, .. } => Self::List { inner, nullable },
            Self::Named { name, .. } => Self::Named { name, nullable },
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// The item type of a list type expression.
    pub fn list_item(&self) -> Option<&TypeExpression> {
        match self {
            Self::List { inner, .. } => Some(inner),
            Self::Named { .. } => None,
        }
    }

    /// The name at the core of this type expression (`User` for `[User!]`).
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name,
        }
    }

    /// Parses a type expression as written in a variable definition.
    ///
    /// Whitespace, commas and `#` comments between tokens are ignored, as
    /// they are everywhere else in a document.
    pub fn parse(text: &str) -> Result<Self, TypeExpressionParseError> {
        let error = |reason| TypeExpressionParseError {
            text: text.to_string(),
            reason,
        };
        let compact: String = text
            .lines()
            .flat_map(|line| line.split('#').next().unwrap_or_default().chars())
            .filter(|&c| !(c.is_whitespace() || c == ',' || c == '\u{feff}'))
            .collect();
        let (expression, rest) = Self::parse_prefix(&compact).map_err(error)?;
        if !rest.is_empty() {
            return Err(error("unexpected trailing characters"));
        }
        Ok(expression)
    }

    fn parse_prefix(text: &str) -> Result<(Self, &str), &'static str> {
        let (expression, rest) = if let Some(after_open) = text.strip_prefix('[') {
            let (inner, rest) = Self::parse_prefix(after_open)?;
            let rest = rest.strip_prefix(']').ok_or("missing `]`")?;
            (Self::list(inner), rest)
        } else {
            let name_len = text
                .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
                .unwrap_or(text.len());
            if name_len == 0 {
                return Err("expected a type name");
            }
            (Self::named(&text[..name_len]), &text[name_len..])
        };

        match rest.strip_prefix('!') {
            Some(rest) => Ok((expression.non_null(), rest)),
            None => Ok((expression, rest)),
        }
    }

    pub(crate) fn from_ast(ast_type: &AstType<'_, String>) -> Self {
        match ast_type {
            AstType::NamedType(name) => Self::named(name.as_str()),
            AstType::ListType(inner) => Self::list(Self::from_ast(inner)),
            AstType::NonNullType(inner) => Self::from_ast(inner).non_null(),
        }
    }

    /// Returns `true` if both expressions have the same structure,
    /// nullability at every level and innermost name.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns `true` if a variable declared with this type (and whether it
    /// has a non-null default) may be used at a location expecting
    /// `location_type` (which may itself have a default).
    ///
    /// <https://spec.graphql.org/October2021/#IsVariableUsageAllowed()>
    pub fn is_usable_as(
        &self,
        location_type: &TypeExpression,
        variable_has_default: bool,
        location_has_default: bool,
    ) -> bool {
        if !location_type.is_nullable() && self.is_nullable() {
            if !variable_has_default && !location_has_default {
                return false;
            }
            return self.is_compatible_with(&location_type.clone().nullable());
        }
        self.is_compatible_with(location_type)
    }

    fn is_compatible_with(&self, location_type: &TypeExpression) -> bool {
        if !location_type.is_nullable() {
            if self.is_nullable() {
                return false;
            }
            return self
                .clone()
                .nullable()
                .is_compatible_with(&location_type.clone().nullable());
        }
        if !self.is_nullable() {
            return self.clone().nullable().is_compatible_with(location_type);
        }
        match (self, location_type) {
            (Self::List { inner: var_inner, .. }, Self::List { inner: loc_inner, .. }) => {
                var_inner.is_compatible_with(loc_inner)
            },
            (Self::Named { name: var_name, .. }, Self::Named { name: loc_name, .. }) => {
                var_name == loc_name
            },
            _ => false,
        }
    }
}

impl std::fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nullable = match self {
            Self::List { inner, nullable } => {
                write!(f, "[{inner}]")?;
                nullable
            },
            Self::Named { name, nullable } => {
                f.write_str(name)?;
                nullable
            },
        };
        if !nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}
