/// The kind of a [`SyntaxNode`](crate::syntax::SyntaxNode).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxNodeKind {
    /// The root; its children are operations and fragments.
    Document,
    /// `name` is the operation name, `literal` the operation keyword (absent
    /// for the `{ ... }` shorthand).
    Operation,
    VariableCollection,
    /// `name` excludes the `$`; `literal` is the raw type expression.
    Variable,
    /// `literal` is the type condition.
    Fragment,
    SelectionSet,
    Field,
    FragmentSpread,
    /// `literal` is the optional type condition.
    InlineFragment,
    /// A parenthesized argument list.
    InputItemCollection,
    /// A `name: value` pair, either an argument or a complex-value field.
    InputItem,
    Directive,
    ListValue,
    ComplexValue,
    ScalarValue(ScalarValueKind),
    VariableValue,
    EnumValue,
    NullValue,
}

impl SyntaxNodeKind {
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            SyntaxNodeKind::ListValue
                | SyntaxNodeKind::ComplexValue
                | SyntaxNodeKind::ScalarValue(_)
                | SyntaxNodeKind::VariableValue
                | SyntaxNodeKind::EnumValue
                | SyntaxNodeKind::NullValue,
        )
    }

    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            SyntaxNodeKind::Field
                | SyntaxNodeKind::FragmentSpread
                | SyntaxNodeKind::InlineFragment,
        )
    }
}

/// The literal kind of a [`SyntaxNodeKind::ScalarValue`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarValueKind {
    Int,
    Float,
    String,
    Boolean,
}

impl std::fmt::Display for ScalarValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ScalarValueKind::Int => "Int",
            ScalarValueKind::Float => "Float",
            ScalarValueKind::String => "String",
            ScalarValueKind::Boolean => "Boolean",
        })
    }
}
