//! Queries over `portal_requests`.

use model::request::RequestStatus;

pub mod create_request;
pub mod get_request;
pub mod list_requests;
pub mod update_request;
pub mod update_status;

/// Failures of the transactional request writes. The editability re-check
/// runs inside the write transaction, so the locked case surfaces from
/// here rather than from a separate read.
#[derive(Debug, thiserror::Error)]
pub enum RequestWriteError {
    /// No live row matches the public UUID
    #[error("The portal request does not exist")]
    NotFound,
    /// The request left the editable set; the current status is carried for
    /// the caller's message
    #[error("The portal request is not editable while {0}")]
    EditLocked(RequestStatus),
    /// Anything else sqlx reported
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
