use sqlx::PgPool;
use uuid::Uuid;

use crate::portals::PortalWriteError;

/// Soft-delete a portal. Requests already raised against it keep their rows.
#[tracing::instrument(skip(pool))]
pub async fn delete_portal(pool: &PgPool, portal_id: Uuid) -> Result<(), PortalWriteError> {
    let deleted = sqlx::query_scalar::<_, Uuid>(
        r#"
        UPDATE portals
        SET deleted_at = now(), updated_at = now()
        WHERE id = $1 AND deleted_at IS NULL
        RETURNING id
        "#,
    )
    .bind(portal_id)
    .fetch_optional(pool)
    .await?;

    match deleted {
        Some(_) => Ok(()),
        None => Err(PortalWriteError::NotFound),
    }
}
