use model::request::{PortalRequest, PortalRequestDetails};
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch a live request by its public UUID
#[tracing::instrument(skip(pool))]
pub async fn get_request_by_uuid(
    pool: &PgPool,
    uuid: Uuid,
) -> Result<Option<PortalRequest>, sqlx::Error> {
    sqlx::query_as::<_, PortalRequest>(
        r#"
        SELECT *
        FROM portal_requests
        WHERE uuid = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(uuid)
    .fetch_optional(pool)
    .await
}

/// Fetch a live request by its public UUID, joined with submitter and
/// portal for display
#[tracing::instrument(skip(pool))]
pub async fn get_request_details_by_uuid(
    pool: &PgPool,
    uuid: Uuid,
) -> Result<Option<PortalRequestDetails>, sqlx::Error> {
    sqlx::query_as::<_, PortalRequestDetails>(
        r#"
        SELECT
            pr.*,
            u.name AS submitter_name,
            u.email AS submitter_email,
            p.name AS portal_name
        FROM portal_requests pr
        JOIN users u ON u.id = pr.submitted_by
        JOIN portals p ON p.id = pr.portal_id
        WHERE pr.uuid = $1 AND pr.deleted_at IS NULL
        "#,
    )
    .bind(uuid)
    .fetch_optional(pool)
    .await
}
