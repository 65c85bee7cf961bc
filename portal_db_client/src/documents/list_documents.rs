use model::document::PortalRequestDocument;
use sqlx::PgPool;
use uuid::Uuid;

/// All live documents attached to a request, oldest first
#[tracing::instrument(skip(pool))]
pub async fn list_documents_for_request(
    pool: &PgPool,
    portal_request_id: Uuid,
) -> Result<Vec<PortalRequestDocument>, sqlx::Error> {
    sqlx::query_as::<_, PortalRequestDocument>(
        r#"
        SELECT * FROM portal_request_documents
        WHERE portal_request_id = $1 AND deleted_at IS NULL
        ORDER BY created_at, id
        "#,
    )
    .bind(portal_request_id)
    .fetch_all(pool)
    .await
}
