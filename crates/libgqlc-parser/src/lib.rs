//! Lexing and syntax-tree building for GraphQL executable documents.
//!
//! The [`lexer`] turns source text into located tokens; the [`syntax`]
//! builders turn those tokens into an arena-allocated [`SyntaxTree`] with no
//! schema knowledge. Both stages stop at the first malformed input and report
//! it as a [`SyntaxError`].

mod error_note;
pub mod lexer;
mod source_position;
mod source_span;
mod string_parsing_error;
pub mod string_value;
pub mod syntax;
mod syntax_error;
mod syntax_error_kind;
pub mod token;
mod token_stream;

pub use error_note::ErrorNote;
pub use error_note::ErrorNoteKind;
pub use error_note::ErrorNotes;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;
pub use string_parsing_error::StringParsingError;
pub use syntax::ParserOptions;
pub use syntax::SyntaxTree;
pub use syntax::parse_document;
pub use syntax::parse_document_with_options;
pub use syntax_error::SyntaxError;
pub use syntax_error_kind::NumberErrorReason;
pub use syntax_error_kind::SyntaxErrorKind;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;
