use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::TimeZone;
use model::request::{RequestPriority, RequestStatus, UpdateRequestFields, append_status_comment};

use super::*;

fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap()
}

#[derive(Debug, Default)]
struct StoreState {
    requests: Vec<PortalRequest>,
    documents: Vec<PortalRequestDocument>,
    edits: usize,
    decisions: usize,
}

#[derive(Debug, Clone, Default)]
struct MockRequestStore {
    state: Arc<Mutex<StoreState>>,
    fail_writes: bool,
}

fn document_row(portal_request_id: Uuid, document: &NewDocument) -> PortalRequestDocument {
    PortalRequestDocument {
        id: Uuid::now_v7(),
        portal_request_id,
        file_name: document.file_name.clone(),
        file_path: document.file_path.clone(),
        original_name: document.original_name.clone(),
        mime_type: document.mime_type.clone(),
        file_size: document.file_size,
        extension: document.extension.clone(),
        created_at: test_now(),
        updated_at: test_now(),
        deleted_at: None,
    }
}

impl RequestStore for MockRequestStore {
    async fn fetch_request(
        &self,
        request_uuid: Uuid,
    ) -> Result<Option<PortalRequest>, RequestStoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .find(|request| request.uuid == request_uuid && request.deleted_at.is_none())
            .cloned())
    }

    async fn persist_request(
        &self,
        new_request: &NewPortalRequest,
        documents: &[NewDocument],
    ) -> Result<PortalRequest, RequestStoreError> {
        if self.fail_writes {
            return Err(RequestStoreError::StorageLayerError(anyhow::anyhow!(
                "insert rejected"
            )));
        }

        let mut state = self.state.lock().unwrap();
        let request = PortalRequest {
            id: Uuid::now_v7(),
            portal_id: new_request.portal_id,
            submitted_by: new_request.submitted_by,
            priority: new_request.priority,
            status: RequestStatus::Pending,
            uuid: new_request.uuid,
            comments: new_request.comments.clone(),
            reason: None,
            reviewed_at: None,
            reviewed_by: None,
            created_at: test_now(),
            updated_at: test_now(),
            deleted_at: None,
        };
        state.requests.push(request.clone());
        for document in documents {
            let row = document_row(request.id, document);
            state.documents.push(row);
        }
        Ok(request)
    }

    async fn apply_request_edit(
        &self,
        request_uuid: Uuid,
        fields: &UpdateRequestFields,
        documents: &[NewDocument],
    ) -> Result<PortalRequest, RequestStoreError> {
        if self.fail_writes {
            return Err(RequestStoreError::StorageLayerError(anyhow::anyhow!(
                "update rejected"
            )));
        }

        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .iter_mut()
            .find(|request| request.uuid == request_uuid && request.deleted_at.is_none())
            .ok_or(RequestStoreError::RequestNotFound)?;
        if !request.is_editable() {
            return Err(RequestStoreError::EditLocked(request.status));
        }

        if let Some(portal_id) = fields.portal_id {
            request.portal_id = portal_id;
        }
        if let Some(priority) = fields.priority {
            request.priority = priority;
        }
        if let Some(comments) = fields.comments.clone() {
            request.comments = Some(comments);
        }
        let updated = request.clone();
        let request_id = updated.id;
        for document in documents {
            let row = document_row(request_id, document);
            state.documents.push(row);
        }
        state.edits += 1;
        Ok(updated)
    }

    async fn apply_status_update(
        &self,
        request_uuid: Uuid,
        decision: &StatusDecision,
    ) -> Result<PortalRequest, RequestStoreError> {
        if self.fail_writes {
            return Err(RequestStoreError::StorageLayerError(anyhow::anyhow!(
                "update rejected"
            )));
        }

        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .iter_mut()
            .find(|request| request.uuid == request_uuid && request.deleted_at.is_none())
            .ok_or(RequestStoreError::RequestNotFound)?;

        if let Some(comment) = decision.additional_comment.as_deref() {
            request.comments = Some(append_status_comment(
                request.comments.as_deref(),
                decision.reviewed_at,
                comment,
            ));
        }
        request.status = decision.status;
        request.reason = decision.reason.clone();
        request.reviewed_by = Some(decision.reviewed_by);
        request.reviewed_at = Some(decision.reviewed_at);
        let updated = request.clone();
        state.decisions += 1;
        Ok(updated)
    }

    async fn attach_document(
        &self,
        request_uuid: Uuid,
        document: &NewDocument,
    ) -> Result<PortalRequestDocument, RequestStoreError> {
        if self.fail_writes {
            return Err(RequestStoreError::StorageLayerError(anyhow::anyhow!(
                "insert rejected"
            )));
        }

        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .iter()
            .find(|request| request.uuid == request_uuid && request.deleted_at.is_none())
            .ok_or(RequestStoreError::RequestNotFound)?;
        if !request.is_editable() {
            return Err(RequestStoreError::EditLocked(request.status));
        }
        let row = document_row(request.id, document);
        state.documents.push(row.clone());
        Ok(row)
    }

    async fn fetch_document(
        &self,
        portal_request_id: Uuid,
        document_id: Uuid,
    ) -> Result<Option<PortalRequestDocument>, RequestStoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .documents
            .iter()
            .find(|document| {
                document.id == document_id
                    && document.portal_request_id == portal_request_id
                    && document.deleted_at.is_none()
            })
            .cloned())
    }

    async fn remove_document(
        &self,
        portal_request_id: Uuid,
        document_id: Uuid,
    ) -> Result<(), RequestStoreError> {
        let mut state = self.state.lock().unwrap();
        let document = state
            .documents
            .iter_mut()
            .find(|document| {
                document.id == document_id
                    && document.portal_request_id == portal_request_id
                    && document.deleted_at.is_none()
            })
            .ok_or(RequestStoreError::RequestNotFound)?;
        document.deleted_at = Some(test_now());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
struct MockDocumentStorage {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_after: Option<usize>,
    fail_removes: bool,
    stores: Arc<Mutex<usize>>,
    removes: Arc<Mutex<usize>>,
}

impl MockDocumentStorage {
    fn stored_blobs(&self) -> HashMap<String, Vec<u8>> {
        self.blobs.lock().unwrap().clone()
    }

    fn store_calls(&self) -> usize {
        *self.stores.lock().unwrap()
    }

    fn remove_calls(&self) -> usize {
        *self.removes.lock().unwrap()
    }
}

impl DocumentStorage for MockDocumentStorage {
    async fn store_blob(
        &self,
        path: &str,
        bytes: &[u8],
        _content_type: Option<&str>,
    ) -> anyhow::Result<()> {
        let mut stores = self.stores.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if *stores >= limit {
                return Err(anyhow::anyhow!("bucket unavailable"));
            }
        }
        *stores += 1;
        self.blobs
            .lock()
            .unwrap()
            .insert(path.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn remove_blob(&self, path: &str) -> anyhow::Result<()> {
        if self.fail_removes {
            return Err(anyhow::anyhow!("bucket unavailable"));
        }
        // Removing an absent key succeeds, matching object storage deletes.
        *self.removes.lock().unwrap() += 1;
        self.blobs.lock().unwrap().remove(path);
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn submitter() -> UserContext {
    UserContext {
        user_id: Uuid::new_v4(),
        name: "Dana Smith".to_string(),
        email: "dana@example.com".to_string(),
        permissions: Default::default(),
    }
}

fn reviewer() -> UserContext {
    UserContext {
        user_id: Uuid::new_v4(),
        name: "Rae Jones".to_string(),
        email: "rae@example.com".to_string(),
        permissions: [REVIEW_PORTAL_REQUESTS.to_string()].into_iter().collect(),
    }
}

fn service(
    store: &MockRequestStore,
    storage: &MockDocumentStorage,
) -> RequestLifecycleServiceImpl<MockRequestStore, MockDocumentStorage, FixedClock> {
    RequestLifecycleServiceImpl::new(store.clone(), storage.clone(), FixedClock(test_now()))
}

fn seed_request(
    store: &MockRequestStore,
    submitted_by: Uuid,
    status: RequestStatus,
) -> PortalRequest {
    let request = PortalRequest {
        id: Uuid::now_v7(),
        portal_id: Uuid::new_v4(),
        submitted_by,
        priority: RequestPriority::Medium,
        status,
        uuid: Uuid::new_v4(),
        comments: Some("original".to_string()),
        reason: None,
        reviewed_at: None,
        reviewed_by: None,
        created_at: test_now(),
        updated_at: test_now(),
        deleted_at: None,
    };
    store.state.lock().unwrap().requests.push(request.clone());
    request
}

fn upload(name: &str, bytes: &[u8]) -> DocumentUpload {
    DocumentUpload {
        original_name: name.to_string(),
        content_type: Some("application/pdf".to_string()),
        bytes: bytes.to_vec(),
    }
}

#[tokio::test]
async fn store_request_persists_a_pending_request_with_its_documents() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();

    let request = service(&store, &storage)
        .store_request(
            &user,
            StoreRequestInput {
                portal_id: Uuid::new_v4(),
                priority: None,
                comments: Some("Please upgrade the wiki".to_string()),
                documents: vec![upload("Design Doc.pdf", b"abc"), upload("notes.txt", b"xyz")],
            },
        )
        .await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.priority, RequestPriority::Medium);
    assert_eq!(request.submitted_by, user.user_id);

    let (expected_name, _) = stored_file_name("Design Doc.pdf", test_now().timestamp());
    let blobs = storage.stored_blobs();
    assert_eq!(blobs.len(), 2);
    assert!(blobs.contains_key(&document_storage_path(&expected_name)));

    let state = store.state.lock().unwrap();
    assert_eq!(state.documents.len(), 2);
    assert!(state
        .documents
        .iter()
        .all(|document| document.portal_request_id == request.id));
    assert_eq!(state.documents[0].mime_type, "application/pdf");
    assert_eq!(state.documents[0].file_size, 3);
    Ok(())
}

#[tokio::test]
async fn store_request_rejects_empty_files_before_touching_storage() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();

    let result = service(&store, &storage)
        .store_request(
            &submitter(),
            StoreRequestInput {
                portal_id: Uuid::new_v4(),
                priority: None,
                comments: None,
                documents: vec![upload("ok.pdf", b"abc"), upload("empty.pdf", b"")],
            },
        )
        .await;

    assert!(
        matches!(result, Err(StoreRequestError::EmptyDocument(ref name)) if name == "empty.pdf")
    );
    assert_eq!(storage.store_calls(), 0);
    assert!(store.state.lock().unwrap().requests.is_empty());
}

#[tokio::test]
async fn store_request_removes_blobs_when_persistence_fails() {
    let store = MockRequestStore {
        fail_writes: true,
        ..Default::default()
    };
    let storage = MockDocumentStorage::default();

    let result = service(&store, &storage)
        .store_request(
            &submitter(),
            StoreRequestInput {
                portal_id: Uuid::new_v4(),
                priority: Some(RequestPriority::High),
                comments: None,
                documents: vec![upload("a.pdf", b"a"), upload("b.pdf", b"b")],
            },
        )
        .await;

    assert!(matches!(result, Err(StoreRequestError::StorageLayerError(_))));
    assert!(storage.stored_blobs().is_empty());
    assert_eq!(storage.remove_calls(), 2);
    assert!(store.state.lock().unwrap().requests.is_empty());
}

#[tokio::test]
async fn store_request_unwinds_earlier_blobs_when_an_upload_fails() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage {
        fail_after: Some(1),
        ..Default::default()
    };

    let result = service(&store, &storage)
        .store_request(
            &submitter(),
            StoreRequestInput {
                portal_id: Uuid::new_v4(),
                priority: None,
                comments: None,
                documents: vec![upload("first.pdf", b"a"), upload("second.pdf", b"b")],
            },
        )
        .await;

    assert!(matches!(result, Err(StoreRequestError::StorageLayerError(_))));
    assert_eq!(storage.store_calls(), 1);
    assert_eq!(storage.remove_calls(), 1);
    assert!(storage.stored_blobs().is_empty());
    assert!(store.state.lock().unwrap().requests.is_empty());
}

#[tokio::test]
async fn update_request_applies_fields_and_attaches_documents() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let updated = service(&store, &storage)
        .update_request(
            &user,
            seeded.uuid,
            UpdateRequestInput {
                fields: UpdateRequestFields {
                    portal_id: None,
                    priority: Some(RequestPriority::High),
                    comments: Some("updated description".to_string()),
                },
                documents: vec![upload("addendum.pdf", b"more")],
            },
        )
        .await?;

    assert_eq!(updated.priority, RequestPriority::High);
    assert_eq!(updated.comments.as_deref(), Some("updated description"));

    let state = store.state.lock().unwrap();
    assert_eq!(state.edits, 1);
    assert_eq!(state.documents.len(), 1);
    assert_eq!(storage.stored_blobs().len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_request_rejects_a_user_who_did_not_raise_it() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let seeded = seed_request(&store, Uuid::new_v4(), RequestStatus::Pending);

    let result = service(&store, &storage)
        .update_request(
            &submitter(),
            seeded.uuid,
            UpdateRequestInput {
                fields: UpdateRequestFields {
                    portal_id: None,
                    priority: Some(RequestPriority::Low),
                    comments: None,
                },
                documents: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(UpdateRequestError::NotOwner)));
    assert_eq!(store.state.lock().unwrap().edits, 0);
}

#[tokio::test]
async fn update_request_is_locked_once_a_decision_lands() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Approved);

    let result = service(&store, &storage)
        .update_request(
            &user,
            seeded.uuid,
            UpdateRequestInput {
                fields: UpdateRequestFields {
                    portal_id: None,
                    priority: None,
                    comments: Some("too late".to_string()),
                },
                documents: vec![upload("late.pdf", b"x")],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(UpdateRequestError::EditLocked(RequestStatus::Approved))
    ));
    assert_eq!(store.state.lock().unwrap().edits, 0);
    assert_eq!(storage.store_calls(), 0);
}

#[tokio::test]
async fn update_request_reports_a_missing_request() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();

    let result = service(&store, &storage)
        .update_request(
            &submitter(),
            Uuid::new_v4(),
            UpdateRequestInput {
                fields: UpdateRequestFields {
                    portal_id: None,
                    priority: None,
                    comments: None,
                },
                documents: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(UpdateRequestError::RequestNotFound)));
}

#[tokio::test]
async fn update_status_requires_the_review_permission() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let result = service(&store, &storage)
        .update_status(
            &user,
            seeded.uuid,
            StatusUpdateInput {
                status: RequestStatus::Approved,
                reason: None,
                additional_comment: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(UpdateStatusError::MissingReviewPermission)
    ));
    assert_eq!(store.state.lock().unwrap().decisions, 0);
}

#[tokio::test]
async fn update_status_records_the_reviewer_and_appends_the_audit_note() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let acting_reviewer = reviewer();
    let seeded = seed_request(&store, Uuid::new_v4(), RequestStatus::UnderReview);

    let updated = service(&store, &storage)
        .update_status(
            &acting_reviewer,
            seeded.uuid,
            StatusUpdateInput {
                status: RequestStatus::Approved,
                reason: Some("capacity freed".to_string()),
                additional_comment: Some("Approved after review".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::Approved);
    assert_eq!(updated.reviewed_by, Some(acting_reviewer.user_id));
    assert_eq!(updated.reviewed_at, Some(test_now()));
    assert_eq!(updated.reason.as_deref(), Some("capacity freed"));
    assert_eq!(
        updated.comments.as_deref(),
        Some("original\n\n[Status Update - 2025-03-15 10:30:00]: Approved after review")
    );
    Ok(())
}

#[tokio::test]
async fn update_status_without_a_note_leaves_comments_untouched() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let seeded = seed_request(&store, Uuid::new_v4(), RequestStatus::Pending);

    let updated = service(&store, &storage)
        .update_status(
            &reviewer(),
            seeded.uuid,
            StatusUpdateInput {
                status: RequestStatus::Rejected,
                reason: Some("out of scope".to_string()),
                additional_comment: None,
            },
        )
        .await?;

    assert_eq!(updated.comments.as_deref(), Some("original"));
    Ok(())
}

#[tokio::test]
async fn any_status_can_reach_any_other() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let seeded = seed_request(&store, Uuid::new_v4(), RequestStatus::Completed);

    let updated = service(&store, &storage)
        .update_status(
            &reviewer(),
            seeded.uuid,
            StatusUpdateInput {
                status: RequestStatus::Pending,
                reason: Some("reopened".to_string()),
                additional_comment: None,
            },
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::Pending);
    Ok(())
}

#[tokio::test]
async fn add_document_stores_the_blob_then_the_row() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::UnderReview);

    let document = service(&store, &storage)
        .add_document(&user, seeded.uuid, upload("Late Evidence.pdf", b"data"))
        .await?;

    let (expected_name, extension) = stored_file_name("Late Evidence.pdf", test_now().timestamp());
    assert_eq!(document.file_name, expected_name);
    assert_eq!(extension, "pdf");
    assert_eq!(document.portal_request_id, seeded.id);
    assert!(storage
        .stored_blobs()
        .contains_key(&document_storage_path(&expected_name)));
    Ok(())
}

#[tokio::test]
async fn add_document_rejects_a_locked_request() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Cancelled);

    let result = service(&store, &storage)
        .add_document(&user, seeded.uuid, upload("late.pdf", b"x"))
        .await;

    assert!(matches!(
        result,
        Err(AddDocumentError::EditLocked(RequestStatus::Cancelled))
    ));
    assert_eq!(storage.store_calls(), 0);
}

#[tokio::test]
async fn add_document_removes_the_blob_when_the_row_insert_fails() {
    let store = MockRequestStore {
        fail_writes: true,
        ..Default::default()
    };
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let result = service(&store, &storage)
        .add_document(&user, seeded.uuid, upload("doomed.pdf", b"x"))
        .await;

    assert!(matches!(result, Err(AddDocumentError::StorageLayerError(_))));
    assert_eq!(storage.remove_calls(), 1);
    assert!(storage.stored_blobs().is_empty());
}

#[tokio::test]
async fn delete_document_removes_the_blob_and_soft_deletes_the_row() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let planned = plan_document(&upload("evidence.pdf", b"data"), test_now());
    let row = document_row(seeded.id, &planned);
    store.state.lock().unwrap().documents.push(row.clone());
    storage
        .blobs
        .lock()
        .unwrap()
        .insert(planned.file_path.clone(), b"data".to_vec());

    service(&store, &storage)
        .delete_document(&user, seeded.uuid, row.id)
        .await?;

    {
        let state = store.state.lock().unwrap();
        assert!(state.documents[0].deleted_at.is_some());
    }
    assert!(!storage.stored_blobs().contains_key(&planned.file_path));
    assert_eq!(storage.remove_calls(), 1);

    // A repeat delete is a plain not-found, never a harder failure.
    let result = service(&store, &storage)
        .delete_document(&user, seeded.uuid, row.id)
        .await;
    assert!(matches!(result, Err(DeleteDocumentError::DocumentNotFound)));
    Ok(())
}

#[tokio::test]
async fn delete_document_proceeds_when_the_blob_is_already_gone() -> anyhow::Result<()> {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let planned = plan_document(&upload("evidence.pdf", b"data"), test_now());
    let row = document_row(seeded.id, &planned);
    store.state.lock().unwrap().documents.push(row.clone());

    service(&store, &storage)
        .delete_document(&user, seeded.uuid, row.id)
        .await?;

    let state = store.state.lock().unwrap();
    assert!(state.documents[0].deleted_at.is_some());
    Ok(())
}

#[tokio::test]
async fn delete_document_keeps_the_row_when_blob_removal_fails() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage {
        fail_removes: true,
        ..Default::default()
    };
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let planned = plan_document(&upload("evidence.pdf", b"data"), test_now());
    let row = document_row(seeded.id, &planned);
    store.state.lock().unwrap().documents.push(row.clone());

    let result = service(&store, &storage)
        .delete_document(&user, seeded.uuid, row.id)
        .await;

    assert!(matches!(
        result,
        Err(DeleteDocumentError::StorageLayerError(_))
    ));
    let state = store.state.lock().unwrap();
    assert!(state.documents[0].deleted_at.is_none());
}

#[tokio::test]
async fn delete_document_reports_an_unknown_document() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let user = submitter();
    let seeded = seed_request(&store, user.user_id, RequestStatus::Pending);

    let result = service(&store, &storage)
        .delete_document(&user, seeded.uuid, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(DeleteDocumentError::DocumentNotFound)));
}

#[tokio::test]
async fn delete_document_rejects_a_user_who_did_not_raise_the_request() {
    let store = MockRequestStore::default();
    let storage = MockDocumentStorage::default();
    let seeded = seed_request(&store, Uuid::new_v4(), RequestStatus::Pending);

    let result = service(&store, &storage)
        .delete_document(&submitter(), seeded.uuid, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(DeleteDocumentError::NotOwner)));
}
