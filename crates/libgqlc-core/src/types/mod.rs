mod type_expression;

pub use type_expression::TypeExpression;
pub use type_expression::TypeExpressionParseError;
