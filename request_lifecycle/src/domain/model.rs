//! Contains the domain values and failure modes for the request lifecycle.

use chrono::{DateTime, Utc};
use model::request::{RequestPriority, RequestStatus, UpdateRequestFields};
use uuid::Uuid;

/// An uploaded file travelling through the lifecycle service
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Filename as supplied by the client
    pub original_name: String,
    /// Declared MIME type, when the client sent one
    pub content_type: Option<String>,
    /// The file content
    pub bytes: Vec<u8>,
}

/// Input for raising a new request
#[derive(Debug, Clone)]
pub struct StoreRequestInput {
    /// The portal the request is raised against
    pub portal_id: Uuid,
    /// Requested priority; defaults to medium when absent
    pub priority: Option<RequestPriority>,
    /// Free-text description of the request
    pub comments: Option<String>,
    /// Files to attach
    pub documents: Vec<DocumentUpload>,
}

/// Input for editing an open request
#[derive(Debug, Clone)]
pub struct UpdateRequestInput {
    /// The fields to change; absent fields keep their values
    pub fields: UpdateRequestFields,
    /// Additional files to attach
    pub documents: Vec<DocumentUpload>,
}

/// Input for a reviewer decision
#[derive(Debug, Clone)]
pub struct StatusUpdateInput {
    /// The status to move the request to
    pub status: RequestStatus,
    /// The reviewer's reason for the decision
    pub reason: Option<String>,
    /// A note appended to the request's comment trail
    pub additional_comment: Option<String>,
}

/// A reviewer decision resolved against an acting user and a clock,
/// ready to persist
#[derive(Debug, Clone)]
pub struct StatusDecision {
    /// The status to move the request to
    pub status: RequestStatus,
    /// The reviewer's reason for the decision
    pub reason: Option<String>,
    /// A note appended to the request's comment trail
    pub additional_comment: Option<String>,
    /// The reviewing user
    pub reviewed_by: Uuid,
    /// When the decision was made
    pub reviewed_at: DateTime<Utc>,
}

/// Failure modes of the request store port
#[derive(Debug, thiserror::Error)]
pub enum RequestStoreError {
    /// The addressed row does not exist
    #[error("The portal request does not exist")]
    RequestNotFound,
    /// The request left the editable states before the write landed
    #[error("The portal request is not editable while {0}")]
    EditLocked(RequestStatus),
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Failure modes of raising a request
#[derive(Debug, thiserror::Error)]
pub enum StoreRequestError {
    /// An uploaded file had no content
    #[error("The uploaded document {0:?} is empty")]
    EmptyDocument(String),
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Failure modes of editing a request
#[derive(Debug, thiserror::Error)]
pub enum UpdateRequestError {
    /// The request does not exist
    #[error("The portal request does not exist")]
    RequestNotFound,
    /// The acting user did not raise the request
    #[error("Only the submitter may edit the portal request")]
    NotOwner,
    /// The request is no longer editable
    #[error("The portal request is not editable while {0}")]
    EditLocked(RequestStatus),
    /// An uploaded file had no content
    #[error("The uploaded document {0:?} is empty")]
    EmptyDocument(String),
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

impl From<RequestStoreError> for UpdateRequestError {
    fn from(error: RequestStoreError) -> Self {
        match error {
            RequestStoreError::RequestNotFound => UpdateRequestError::RequestNotFound,
            RequestStoreError::EditLocked(status) => UpdateRequestError::EditLocked(status),
            RequestStoreError::StorageLayerError(error) => {
                UpdateRequestError::StorageLayerError(error)
            }
        }
    }
}

/// Failure modes of recording a reviewer decision
#[derive(Debug, thiserror::Error)]
pub enum UpdateStatusError {
    /// The request does not exist
    #[error("The portal request does not exist")]
    RequestNotFound,
    /// The acting user may not review portal requests
    #[error("The user is not permitted to review portal requests")]
    MissingReviewPermission,
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

impl From<RequestStoreError> for UpdateStatusError {
    fn from(error: RequestStoreError) -> Self {
        match error {
            RequestStoreError::RequestNotFound => UpdateStatusError::RequestNotFound,
            RequestStoreError::EditLocked(status) => UpdateStatusError::StorageLayerError(
                anyhow::anyhow!("unexpected edit lock in {status} while recording a decision"),
            ),
            RequestStoreError::StorageLayerError(error) => {
                UpdateStatusError::StorageLayerError(error)
            }
        }
    }
}

/// Failure modes of attaching a document
#[derive(Debug, thiserror::Error)]
pub enum AddDocumentError {
    /// The request does not exist
    #[error("The portal request does not exist")]
    RequestNotFound,
    /// The acting user did not raise the request
    #[error("Only the submitter may attach documents to the portal request")]
    NotOwner,
    /// The request is no longer editable
    #[error("The portal request is not editable while {0}")]
    EditLocked(RequestStatus),
    /// The uploaded file had no content
    #[error("The uploaded document {0:?} is empty")]
    EmptyDocument(String),
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

impl From<RequestStoreError> for AddDocumentError {
    fn from(error: RequestStoreError) -> Self {
        match error {
            RequestStoreError::RequestNotFound => AddDocumentError::RequestNotFound,
            RequestStoreError::EditLocked(status) => AddDocumentError::EditLocked(status),
            RequestStoreError::StorageLayerError(error) => {
                AddDocumentError::StorageLayerError(error)
            }
        }
    }
}

/// Failure modes of removing a document
#[derive(Debug, thiserror::Error)]
pub enum DeleteDocumentError {
    /// The request does not exist
    #[error("The portal request does not exist")]
    RequestNotFound,
    /// The document does not exist on the request
    #[error("The document does not exist")]
    DocumentNotFound,
    /// The acting user did not raise the request
    #[error("Only the submitter may remove documents from the portal request")]
    NotOwner,
    /// The request is no longer editable
    #[error("The portal request is not editable while {0}")]
    EditLocked(RequestStatus),
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

impl From<RequestStoreError> for DeleteDocumentError {
    fn from(error: RequestStoreError) -> Self {
        match error {
            RequestStoreError::RequestNotFound => DeleteDocumentError::RequestNotFound,
            RequestStoreError::EditLocked(status) => DeleteDocumentError::EditLocked(status),
            RequestStoreError::StorageLayerError(error) => {
                DeleteDocumentError::StorageLayerError(error)
            }
        }
    }
}
