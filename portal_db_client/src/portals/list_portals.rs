use model::portal::Portal;
use sqlx::PgPool;

/// All live portals, alphabetised for pickers and listings
#[tracing::instrument(skip(pool))]
pub async fn list_portals(pool: &PgPool) -> Result<Vec<Portal>, sqlx::Error> {
    sqlx::query_as::<_, Portal>(
        r#"
        SELECT * FROM portals
        WHERE deleted_at IS NULL
        ORDER BY name, id
        "#,
    )
    .fetch_all(pool)
    .await
}
