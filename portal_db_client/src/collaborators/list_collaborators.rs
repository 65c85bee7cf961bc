use model::portal::PortalCollaborator;
use sqlx::PgPool;
use uuid::Uuid;

/// All collaborator grants on a portal, earliest start first
#[tracing::instrument(skip(pool))]
pub async fn list_collaborators(
    pool: &PgPool,
    portal_id: Uuid,
) -> Result<Vec<PortalCollaborator>, sqlx::Error> {
    sqlx::query_as::<_, PortalCollaborator>(
        r#"
        SELECT * FROM portal_collaborators
        WHERE portal_id = $1
        ORDER BY start_date, id
        "#,
    )
    .bind(portal_id)
    .fetch_all(pool)
    .await
}
