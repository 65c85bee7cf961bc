use model::portal::{Portal, PortalFields};
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a new portal row
#[tracing::instrument(skip(pool, fields), fields(name = %fields.name))]
pub async fn create_portal(pool: &PgPool, fields: &PortalFields) -> Result<Portal, sqlx::Error> {
    sqlx::query_as::<_, Portal>(
        r#"
        INSERT INTO portals (
            id, name, description, owner_id, url, domain, is_active, status,
            ip_address, machine_type, framework, framework_version,
            database, database_version, is_public, server_backup,
            db_backup, migrate_to_new_server
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8,
            $9, $10, $11, $12, $13, $14, $15, $16, $17, $18
        )
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
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
    .fetch_one(pool)
    .await
}
