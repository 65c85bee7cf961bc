//! Contains the service logic for the request lifecycle.

use chrono::{DateTime, Utc};
use model::document::{
    NewDocument, PortalRequestDocument, document_storage_path, stored_file_name,
};
use model::request::{NewPortalRequest, PortalRequest};
use model::user::{REVIEW_PORTAL_REQUESTS, UserContext};
use uuid::Uuid;

use crate::domain::{
    model::{
        AddDocumentError, DeleteDocumentError, DocumentUpload, RequestStoreError, StatusDecision,
        StatusUpdateInput, StoreRequestError, StoreRequestInput, UpdateRequestError,
        UpdateRequestInput, UpdateStatusError,
    },
    port::{Clock, DocumentStorage, RequestStore},
};

#[cfg(test)]
mod test;

/// The RequestLifecycleService defines the mutating operations of the
/// request lifecycle. Every operation names the acting user explicitly.
pub trait RequestLifecycleService: Clone + Send + Sync + 'static {
    /// Raises a new request on behalf of the acting user, storing any
    /// uploaded documents
    fn store_request(
        &self,
        acting_user: &UserContext,
        input: StoreRequestInput,
    ) -> impl Future<Output = Result<PortalRequest, StoreRequestError>> + Send;

    /// Edits an open request on behalf of its submitter
    fn update_request(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        input: UpdateRequestInput,
    ) -> impl Future<Output = Result<PortalRequest, UpdateRequestError>> + Send;

    /// Records a reviewer decision on behalf of the acting user
    fn update_status(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        input: StatusUpdateInput,
    ) -> impl Future<Output = Result<PortalRequest, UpdateStatusError>> + Send;

    /// Attaches one document to an open request on behalf of its submitter
    fn add_document(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        upload: DocumentUpload,
    ) -> impl Future<Output = Result<PortalRequestDocument, AddDocumentError>> + Send;

    /// Removes one document from an open request on behalf of its submitter
    fn delete_document(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        document_id: Uuid,
    ) -> impl Future<Output = Result<(), DeleteDocumentError>> + Send;
}

/// Implementation of the RequestLifecycleService over a RequestStore, a
/// DocumentStorage and a Clock
#[derive(Debug, Clone)]
pub struct RequestLifecycleServiceImpl<RS, DS, C>
where
    RS: RequestStore,
    DS: DocumentStorage,
    C: Clock,
{
    /// The underlying request store
    request_store: RS,
    /// The underlying document storage
    document_storage: DS,
    /// The clock decisions and uploads are stamped with
    clock: C,
}

impl<RS, DS, C> RequestLifecycleServiceImpl<RS, DS, C>
where
    RS: RequestStore,
    DS: DocumentStorage,
    C: Clock,
{
    /// Creates a new RequestLifecycleService
    pub fn new(request_store: RS, document_storage: DS, clock: C) -> Self {
        Self {
            request_store,
            document_storage,
            clock,
        }
    }

    /// Writes every planned blob, removing the ones already written if a
    /// later write fails. Uploads and plans line up index for index.
    async fn store_blobs(
        &self,
        uploads: &[DocumentUpload],
        planned: &[NewDocument],
    ) -> anyhow::Result<()> {
        for (index, (upload, document)) in uploads.iter().zip(planned).enumerate() {
            let result = self
                .document_storage
                .store_blob(
                    &document.file_path,
                    &upload.bytes,
                    upload.content_type.as_deref(),
                )
                .await;

            if let Err(error) = result {
                self.rollback_blobs(&planned[..index]).await;
                return Err(error);
            }
        }
        Ok(())
    }

    /// Best-effort removal of blobs whose rows never landed. Failures are
    /// logged and swallowed; an orphaned blob must not mask the original
    /// error.
    async fn rollback_blobs(&self, planned: &[NewDocument]) {
        for document in planned {
            if let Err(error) = self.document_storage.remove_blob(&document.file_path).await {
                tracing::warn!(
                    path = %document.file_path,
                    "failed to remove orphaned document blob: {error:#}"
                );
            }
        }
    }
}

impl<RS, DS, C> RequestLifecycleService for RequestLifecycleServiceImpl<RS, DS, C>
where
    RS: RequestStore,
    DS: DocumentStorage,
    C: Clock,
{
    #[tracing::instrument(
        skip(self, acting_user, input),
        fields(user_id = %acting_user.user_id, portal_id = %input.portal_id)
    )]
    async fn store_request(
        &self,
        acting_user: &UserContext,
        input: StoreRequestInput,
    ) -> Result<PortalRequest, StoreRequestError> {
        validate_uploads(&input.documents).map_err(StoreRequestError::EmptyDocument)?;

        let now = self.clock.now();
        let planned = plan_documents(&input.documents, now);
        self.store_blobs(&input.documents, &planned).await?;

        let new_request = NewPortalRequest {
            uuid: Uuid::new_v4(),
            portal_id: input.portal_id,
            submitted_by: acting_user.user_id,
            priority: input.priority.unwrap_or_default(),
            comments: input.comments,
        };

        match self
            .request_store
            .persist_request(&new_request, &planned)
            .await
        {
            Ok(request) => Ok(request),
            Err(error) => {
                self.rollback_blobs(&planned).await;
                Err(StoreRequestError::StorageLayerError(error.into()))
            }
        }
    }

    #[tracing::instrument(
        skip(self, acting_user, input),
        fields(user_id = %acting_user.user_id)
    )]
    async fn update_request(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        input: UpdateRequestInput,
    ) -> Result<PortalRequest, UpdateRequestError> {
        let request = self
            .request_store
            .fetch_request(request_uuid)
            .await?
            .ok_or(UpdateRequestError::RequestNotFound)?;

        if request.submitted_by != acting_user.user_id {
            return Err(UpdateRequestError::NotOwner);
        }
        if !request.is_editable() {
            return Err(UpdateRequestError::EditLocked(request.status));
        }
        validate_uploads(&input.documents).map_err(UpdateRequestError::EmptyDocument)?;

        let planned = plan_documents(&input.documents, self.clock.now());
        self.store_blobs(&input.documents, &planned).await?;

        match self
            .request_store
            .apply_request_edit(request_uuid, &input.fields, &planned)
            .await
        {
            Ok(updated) => Ok(updated),
            Err(error) => {
                self.rollback_blobs(&planned).await;
                Err(error.into())
            }
        }
    }

    #[tracing::instrument(
        skip(self, acting_user, input),
        fields(user_id = %acting_user.user_id, status = %input.status)
    )]
    async fn update_status(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        input: StatusUpdateInput,
    ) -> Result<PortalRequest, UpdateStatusError> {
        if !acting_user.has_permission(REVIEW_PORTAL_REQUESTS) {
            return Err(UpdateStatusError::MissingReviewPermission);
        }

        let decision = StatusDecision {
            status: input.status,
            reason: input.reason,
            additional_comment: input.additional_comment,
            reviewed_by: acting_user.user_id,
            reviewed_at: self.clock.now(),
        };

        self.request_store
            .apply_status_update(request_uuid, &decision)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(
        skip(self, acting_user, upload),
        fields(user_id = %acting_user.user_id, original_name = %upload.original_name)
    )]
    async fn add_document(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        upload: DocumentUpload,
    ) -> Result<PortalRequestDocument, AddDocumentError> {
        let request = self
            .request_store
            .fetch_request(request_uuid)
            .await?
            .ok_or(AddDocumentError::RequestNotFound)?;

        if request.submitted_by != acting_user.user_id {
            return Err(AddDocumentError::NotOwner);
        }
        if !request.is_editable() {
            return Err(AddDocumentError::EditLocked(request.status));
        }
        if upload.bytes.is_empty() {
            return Err(AddDocumentError::EmptyDocument(upload.original_name));
        }

        let planned = plan_document(&upload, self.clock.now());
        self.document_storage
            .store_blob(
                &planned.file_path,
                &upload.bytes,
                upload.content_type.as_deref(),
            )
            .await?;

        match self
            .request_store
            .attach_document(request_uuid, &planned)
            .await
        {
            Ok(document) => Ok(document),
            Err(error) => {
                self.rollback_blobs(std::slice::from_ref(&planned)).await;
                Err(error.into())
            }
        }
    }

    #[tracing::instrument(
        skip(self, acting_user),
        fields(user_id = %acting_user.user_id)
    )]
    async fn delete_document(
        &self,
        acting_user: &UserContext,
        request_uuid: Uuid,
        document_id: Uuid,
    ) -> Result<(), DeleteDocumentError> {
        let request = self
            .request_store
            .fetch_request(request_uuid)
            .await?
            .ok_or(DeleteDocumentError::RequestNotFound)?;

        if request.submitted_by != acting_user.user_id {
            return Err(DeleteDocumentError::NotOwner);
        }
        if !request.is_editable() {
            return Err(DeleteDocumentError::EditLocked(request.status));
        }

        let document = self
            .request_store
            .fetch_document(request.id, document_id)
            .await?
            .ok_or(DeleteDocumentError::DocumentNotFound)?;

        // Blob first, row second. Storage deletes are idempotent, so an
        // already-missing blob never blocks removing the row; any other
        // storage failure leaves the row in place.
        self.document_storage
            .remove_blob(&document.file_path)
            .await?;

        self.request_store
            .remove_document(request.id, document.id)
            .await
            .map_err(|error| match error {
                RequestStoreError::RequestNotFound => DeleteDocumentError::DocumentNotFound,
                other => other.into(),
            })
    }
}

/// Rejects uploads with no content, naming the first offender
fn validate_uploads(uploads: &[DocumentUpload]) -> Result<(), String> {
    match uploads.iter().find(|upload| upload.bytes.is_empty()) {
        Some(empty) => Err(empty.original_name.clone()),
        None => Ok(()),
    }
}

/// Derives the stored names and storage keys for a batch of uploads
fn plan_documents(uploads: &[DocumentUpload], at: DateTime<Utc>) -> Vec<NewDocument> {
    uploads.iter().map(|upload| plan_document(upload, at)).collect()
}

/// Derives the stored name, storage key and metadata row for one upload
fn plan_document(upload: &DocumentUpload, at: DateTime<Utc>) -> NewDocument {
    let (file_name, extension) = stored_file_name(&upload.original_name, at.timestamp());
    let file_path = document_storage_path(&file_name);

    NewDocument {
        file_name,
        file_path,
        original_name: upload.original_name.clone(),
        mime_type: upload
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string()),
        file_size: upload.bytes.len() as i64,
        extension,
    }
}
