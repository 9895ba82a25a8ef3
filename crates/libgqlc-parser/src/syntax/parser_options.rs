/// Knobs for [`parse_document_with_options`](crate::syntax::parse_document_with_options).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    /// Maximum nesting of selection sets, list/object values and list types.
    pub max_depth: usize,
}

impl ParserOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
