//! The schema-bound document: an arena of [`DocumentPart`]s built from a
//! syntax tree.

mod document_part;
mod document_scope;
mod input_parts;
mod part_collection;
mod part_id;
mod query_document;
mod selection_parts;

pub use document_part::DirectivePart;
pub use document_part::DocumentPart;
pub use document_part::FragmentPart;
pub use document_part::OperationPart;
pub use document_part::PartKind;
pub(crate) use document_scope::DocumentScope;
pub use input_parts::ArgumentTarget;
pub use input_parts::InputArgumentPart;
pub use input_parts::SuppliedValue;
pub use input_parts::SuppliedValuePart;
pub use input_parts::VariablePart;
pub use part_collection::PartCollection;
pub use part_id::PartId;
pub use query_document::Descendants;
pub use query_document::QueryDocument;
pub use selection_parts::FieldSelectionPart;
pub use selection_parts::FieldSelectionSetPart;
pub use selection_parts::FragmentSpreadPart;
pub use selection_parts::InlineFragmentPart;

#[cfg(test)]
mod tests;
