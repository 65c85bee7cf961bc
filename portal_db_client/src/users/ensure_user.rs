use model::user::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Mirror a gateway-authenticated user into the local users table.
///
/// The gateway owns identity; this row exists so foreign keys on requests
/// and portals resolve. Name and email refresh on every call, so renames
/// upstream propagate on the user's next request.
#[tracing::instrument(skip(pool, name, email))]
pub async fn ensure_user(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    email: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE
        SET name = EXCLUDED.name,
            email = EXCLUDED.email,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
}
