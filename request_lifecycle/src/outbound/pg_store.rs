//! Implementation of the RequestStore over the portal database.

use model::document::{NewDocument, PortalRequestDocument};
use model::request::{NewPortalRequest, PortalRequest, UpdateRequestFields};
use portal_db_client::requests::RequestWriteError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    model::{RequestStoreError, StatusDecision},
    port::RequestStore,
};

/// The PortalDb struct is a wrapper around a sqlx::PgPool connected to the
/// portal database.
#[derive(Debug, Clone)]
pub struct PortalDb {
    /// The underlying sqlx::PgPool
    pool: PgPool,
}

impl PortalDb {
    /// Create a new instance of PortalDb
    pub fn new(pool: PgPool) -> PortalDb {
        PortalDb { pool }
    }
}

fn map_write_error(error: RequestWriteError) -> RequestStoreError {
    match error {
        RequestWriteError::NotFound => RequestStoreError::RequestNotFound,
        RequestWriteError::EditLocked(status) => RequestStoreError::EditLocked(status),
        RequestWriteError::Database(error) => RequestStoreError::StorageLayerError(error.into()),
    }
}

impl RequestStore for PortalDb {
    async fn fetch_request(
        &self,
        request_uuid: Uuid,
    ) -> Result<Option<PortalRequest>, RequestStoreError> {
        portal_db_client::requests::get_request::get_request_by_uuid(&self.pool, request_uuid)
            .await
            .map_err(|error| RequestStoreError::StorageLayerError(error.into()))
    }

    async fn persist_request(
        &self,
        new_request: &NewPortalRequest,
        documents: &[NewDocument],
    ) -> Result<PortalRequest, RequestStoreError> {
        portal_db_client::requests::create_request::create_request(
            &self.pool,
            new_request,
            documents,
        )
        .await
        .map_err(|error| RequestStoreError::StorageLayerError(error.into()))
    }

    async fn apply_request_edit(
        &self,
        request_uuid: Uuid,
        fields: &UpdateRequestFields,
        documents: &[NewDocument],
    ) -> Result<PortalRequest, RequestStoreError> {
        portal_db_client::requests::update_request::update_request(
            &self.pool,
            request_uuid,
            fields,
            documents,
        )
        .await
        .map_err(map_write_error)
    }

    async fn apply_status_update(
        &self,
        request_uuid: Uuid,
        decision: &StatusDecision,
    ) -> Result<PortalRequest, RequestStoreError> {
        portal_db_client::requests::update_status::update_status(
            &self.pool,
            request_uuid,
            decision.status,
            decision.reason.as_deref(),
            decision.additional_comment.as_deref(),
            decision.reviewed_by,
            decision.reviewed_at,
        )
        .await
        .map_err(map_write_error)
    }

    async fn attach_document(
        &self,
        request_uuid: Uuid,
        document: &NewDocument,
    ) -> Result<PortalRequestDocument, RequestStoreError> {
        portal_db_client::documents::add_document::add_document(&self.pool, request_uuid, document)
            .await
            .map_err(map_write_error)
    }

    async fn fetch_document(
        &self,
        portal_request_id: Uuid,
        document_id: Uuid,
    ) -> Result<Option<PortalRequestDocument>, RequestStoreError> {
        portal_db_client::documents::get_document::get_document(
            &self.pool,
            portal_request_id,
            document_id,
        )
        .await
        .map_err(|error| RequestStoreError::StorageLayerError(error.into()))
    }

    async fn remove_document(
        &self,
        portal_request_id: Uuid,
        document_id: Uuid,
    ) -> Result<(), RequestStoreError> {
        portal_db_client::documents::delete_document::delete_document(
            &self.pool,
            portal_request_id,
            document_id,
        )
        .await
        .map_err(map_write_error)
    }
}
