use sqlx::PgPool;
use uuid::Uuid;

use crate::requests::RequestWriteError;

/// Soft-delete a document row. The row stops appearing in listings but is
/// never physically removed; clearing the stored file is the caller's job.
#[tracing::instrument(skip(pool))]
pub async fn delete_document(
    pool: &PgPool,
    portal_request_id: Uuid,
    document_id: Uuid,
) -> Result<(), RequestWriteError> {
    let deleted = sqlx::query_scalar::<_, Uuid>(
        r#"
        UPDATE portal_request_documents
        SET deleted_at = now(), updated_at = now()
        WHERE id = $1 AND portal_request_id = $2 AND deleted_at IS NULL
        RETURNING id
        "#,
    )
    .bind(document_id)
    .bind(portal_request_id)
    .fetch_optional(pool)
    .await?;

    match deleted {
        Some(_) => Ok(()),
        None => Err(RequestWriteError::NotFound),
    }
}
