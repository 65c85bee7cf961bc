//! Queries for portal collaborator grants.

pub mod add_collaborator;
pub mod list_collaborators;
