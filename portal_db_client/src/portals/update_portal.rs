use model::portal::{Portal, PortalFields};
use sqlx::PgPool;
use uuid::Uuid;

use crate::portals::PortalWriteError;

/// Replace every editable column of a portal. Portal edits are full
/// replacements, unlike the partial request edits.
#[tracing::instrument(skip(pool, fields))]
pub async fn update_portal(
    pool: &PgPool,
    portal_id: Uuid,
    fields: &PortalFields,
) -> Result<Portal, PortalWriteError> {
    sqlx::query_as::<_, Portal>(
        r#"
        UPDATE portals
        SET name = $1,
            description = $2,
            owner_id = $3,
            url = $4,
            domain = $5,
            is_active = $6,
            status = $7,
            ip_address = $8,
            machine_type = $9,
            framework = $10,
            framework_version = $11,
            database = $12,
            database_version = $13,
            is_public = $14,
            server_backup = $15,
            db_backup = $16,
            migrate_to_new_server = $17,
            updated_at = now()
        WHERE id = $18 AND deleted_at IS NULL
        RETURNING *
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.description)
    .bind(fields.owner_id)
    .bind(&fields.url)
    .bind(&fields.domain)
    .bind(fields.is_active)
    .bind(fields.status)
    .bind(&fields.ip_address)
    .bind(fields.machine_type)
    .bind(&fields.framework)
    .bind(&fields.framework_version)
    .bind(&fields.database)
    .bind(&fields.database_version)
    .bind(fields.is_public)
    .bind(fields.server_backup)
    .bind(fields.db_backup)
    .bind(fields.migrate_to_new_server)
    .bind(portal_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PortalWriteError::NotFound)
}
