//! Queries for documents attached to portal requests.

pub mod add_document;
pub mod delete_document;
pub mod get_document;
pub mod list_documents;
