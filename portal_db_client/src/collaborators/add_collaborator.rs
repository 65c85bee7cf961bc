use model::portal::{NewCollaborator, PortalCollaborator};
use sqlx::PgPool;
use uuid::Uuid;

/// Grant a user collaboration on a portal
#[tracing::instrument(skip(pool, collaborator), fields(portal_id = %collaborator.portal_id))]
pub async fn add_collaborator(
    pool: &PgPool,
    collaborator: &NewCollaborator,
) -> Result<PortalCollaborator, sqlx::Error> {
    sqlx::query_as::<_, PortalCollaborator>(
        r#"
        INSERT INTO portal_collaborators (
            id, portal_id, user_id, status, start_date, end_date, notes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(collaborator.portal_id)
    .bind(collaborator.user_id)
    .bind(collaborator.status)
    .bind(collaborator.start_date)
    .bind(collaborator.end_date)
    .bind(&collaborator.notes)
    .fetch_one(pool)
    .await
}
