use model::user::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch one live user by id
#[tracing::instrument(skip(pool))]
pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
