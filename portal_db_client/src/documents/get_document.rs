use model::document::PortalRequestDocument;
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch one live document, scoped to its owning request so a document id
/// from another request can never be addressed.
#[tracing::instrument(skip(pool))]
pub async fn get_document(
    pool: &PgPool,
    portal_request_id: Uuid,
    document_id: Uuid,
) -> Result<Option<PortalRequestDocument>, sqlx::Error> {
    sqlx::query_as::<_, PortalRequestDocument>(
        r#"
        SELECT * FROM portal_request_documents
        WHERE id = $1 AND portal_request_id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(document_id)
    .bind(portal_request_id)
    .fetch_optional(pool)
    .await
}
