use model::document::{NewDocument, PortalRequestDocument};
use model::request::PortalRequest;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::requests::RequestWriteError;

/// Attach a document to an existing request.
///
/// The owning request row is locked and its status re-checked inside the
/// transaction, so a concurrent reviewer decision cannot race the upload.
#[tracing::instrument(skip(pool, document), fields(original_name = %document.original_name))]
pub async fn add_document(
    pool: &PgPool,
    request_uuid: Uuid,
    document: &NewDocument,
) -> Result<PortalRequestDocument, RequestWriteError> {
    let mut transaction = pool.begin().await?;

    let request = sqlx::query_as::<_, PortalRequest>(
        r#"
        SELECT * FROM portal_requests
        WHERE uuid = $1 AND deleted_at IS NULL
        FOR UPDATE
        "#,
    )
    .bind(request_uuid)
    .fetch_optional(&mut *transaction)
    .await?
    .ok_or(RequestWriteError::NotFound)?;

    if !request.is_editable() {
        return Err(RequestWriteError::EditLocked(request.status));
    }

    let document = insert_document(&mut transaction, request.id, document).await?;

    transaction.commit().await?;

    Ok(document)
}

/// Insert a document row inside an open transaction. The caller holds the
/// lock on the owning request.
pub(crate) async fn insert_document(
    transaction: &mut Transaction<'_, Postgres>,
    portal_request_id: Uuid,
    document: &NewDocument,
) -> Result<PortalRequestDocument, sqlx::Error> {
    sqlx::query_as::<_, PortalRequestDocument>(
        r#"
        INSERT INTO portal_request_documents (
            id, portal_request_id, file_name, file_path,
            original_name, mime_type, file_size, extension
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(portal_request_id)
    .bind(&document.file_name)
    .bind(&document.file_path)
    .bind(&document.original_name)
    .bind(&document.mime_type)
    .bind(document.file_size)
    .bind(&document.extension)
    .fetch_one(transaction.as_mut())
    .await
}
