//! Binds GraphQL executable documents to a schema and validates them.
//!
//! A [`QueryCompiler`] runs the whole pipeline: the
//! [`libgqlc_parser`] syntax tree is walked by the
//! [`DocumentGenerator`](construction::DocumentGenerator) into a
//! [`QueryDocument`](document::QueryDocument), and the numbered
//! [`rules`] then accumulate [`GraphMessage`](messages::GraphMessage)s
//! against it.

mod compiler;
mod config;
pub mod construction;
pub mod document;
pub mod messages;
pub mod rules;
pub mod schema;
pub mod types;

pub use compiler::CompileOutcome;
pub use compiler::QueryCompiler;
pub use config::CompilerConfig;
pub use document::QueryDocument;
pub use messages::GraphMessage;
pub use messages::MessageCollection;
pub use messages::MessageSeverity;
pub use schema::Schema;
pub use schema::SchemaBuilder;

#[cfg(test)]
mod tests;
