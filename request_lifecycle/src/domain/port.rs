//! Contains the port logic for the request lifecycle.

use chrono::{DateTime, Utc};
use model::document::{NewDocument, PortalRequestDocument};
use model::request::{NewPortalRequest, PortalRequest, UpdateRequestFields};
use uuid::Uuid;

use crate::domain::model::{RequestStoreError, StatusDecision};

/// The RequestStore defines the persistence actions of the request lifecycle
pub trait RequestStore: Clone + Send + Sync + 'static {
    /// Fetches a live request by its public uuid
    fn fetch_request(
        &self,
        request_uuid: Uuid,
    ) -> impl Future<Output = Result<Option<PortalRequest>, RequestStoreError>> + Send;

    /// Persists a new request together with its document rows, atomically
    fn persist_request(
        &self,
        new_request: &NewPortalRequest,
        documents: &[NewDocument],
    ) -> impl Future<Output = Result<PortalRequest, RequestStoreError>> + Send;

    /// Applies a partial edit and attaches document rows, atomically. The
    /// implementation re-checks editability under a row lock.
    fn apply_request_edit(
        &self,
        request_uuid: Uuid,
        fields: &UpdateRequestFields,
        documents: &[NewDocument],
    ) -> impl Future<Output = Result<PortalRequest, RequestStoreError>> + Send;

    /// Records a reviewer decision
    fn apply_status_update(
        &self,
        request_uuid: Uuid,
        decision: &StatusDecision,
    ) -> impl Future<Output = Result<PortalRequest, RequestStoreError>> + Send;

    /// Attaches one document row to a request. The implementation re-checks
    /// editability under a row lock.
    fn attach_document(
        &self,
        request_uuid: Uuid,
        document: &NewDocument,
    ) -> impl Future<Output = Result<PortalRequestDocument, RequestStoreError>> + Send;

    /// Fetches a live document scoped to its owning request
    fn fetch_document(
        &self,
        portal_request_id: Uuid,
        document_id: Uuid,
    ) -> impl Future<Output = Result<Option<PortalRequestDocument>, RequestStoreError>> + Send;

    /// Soft-deletes a document row. `RequestNotFound` here means the
    /// document row itself was already gone.
    fn remove_document(
        &self,
        portal_request_id: Uuid,
        document_id: Uuid,
    ) -> impl Future<Output = Result<(), RequestStoreError>> + Send;
}

/// The DocumentStorage holds the uploaded file content
pub trait DocumentStorage: Clone + Send + Sync + 'static {
    /// Writes a blob under the given storage key
    fn store_blob(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Removes the blob under the given storage key
    fn remove_blob(&self, path: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// The Clock supplies the current time, so decision and upload timestamps
/// stay deterministic under test
pub trait Clock: Clone + Send + Sync + 'static {
    /// The current time
    fn now(&self) -> DateTime<Utc>;
}
