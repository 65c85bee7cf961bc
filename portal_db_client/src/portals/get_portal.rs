use model::portal::Portal;
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch one live portal by id
#[tracing::instrument(skip(pool))]
pub async fn get_portal(pool: &PgPool, portal_id: Uuid) -> Result<Option<Portal>, sqlx::Error> {
    sqlx::query_as::<_, Portal>(
        r#"
        SELECT * FROM portals
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(portal_id)
    .fetch_optional(pool)
    .await
}
