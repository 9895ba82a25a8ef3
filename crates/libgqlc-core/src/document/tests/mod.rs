mod part_collection_tests;
mod query_document_tests;
