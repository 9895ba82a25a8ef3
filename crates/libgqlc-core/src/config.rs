use libgqlc_parser::ParserOptions;

/// Options for a [`QueryCompiler`](crate::QueryCompiler).
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```
/// let config: libgqlc_core::CompilerConfig =
///     serde_json::from_str(r#"{ "max_query_depth": 8 }"#).unwrap();
/// assert_eq!(config.max_query_depth, Some(8));
/// assert_eq!(config.max_syntax_depth, 256);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Reject operations whose fields nest deeper than this, counting
    /// through fragment spreads.
    pub max_query_depth: Option<usize>,

    /// Nesting limit enforced while building the syntax tree.
    pub max_syntax_depth: usize,

    /// Bind `__typename` on an interface or union once per concrete type the
    /// abstract type expands to, rather than once against the abstract type.
    pub typename_expands_abstract_types: bool,
}
impl CompilerConfig {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.max_syntax_depth,
        }
    }
}
impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_query_depth: None,
            max_syntax_depth: ParserOptions::DEFAULT_MAX_DEPTH,
            typename_expands_abstract_types: true,
        }
    }
}
