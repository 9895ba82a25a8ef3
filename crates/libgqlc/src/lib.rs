pub use libgqlc_core::*;

/// The schema-independent front end: tokens, the syntax tree and
/// [`SyntaxError`](parser::SyntaxError).
pub mod parser {
    pub use libgqlc_parser::*;
}
