//! Queries for portal assets and their collaborator grants.

pub mod create_portal;
pub mod delete_portal;
pub mod get_portal;
pub mod list_portals;
pub mod update_portal;

/// Failure modes of portal writes
#[derive(Debug, thiserror::Error)]
pub enum PortalWriteError {
    /// No live portal matches the given id
    #[error("The portal does not exist")]
    NotFound,
    /// The database rejected the operation
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
