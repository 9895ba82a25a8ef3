//! Binds a [`SyntaxTree`](libgqlc_parser::SyntaxTree) to a
//! [`Schema`](crate::schema::Schema), producing a
//! [`QueryDocument`](crate::document::QueryDocument).

mod construction_context;
mod construction_error;
mod document_generator;

pub(crate) use construction_context::ArgumentSource;
pub use construction_context::ConstructionContext;
pub(crate) use construction_context::ContextItems;
pub use construction_error::ConstructionError;
pub use document_generator::DocumentGenerator;
