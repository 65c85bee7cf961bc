use chrono::{DateTime, Utc};
use model::request::{PortalRequest, RequestStatus, append_status_comment};
use sqlx::PgPool;
use uuid::Uuid;

use crate::requests::RequestWriteError;

/// Record a reviewer decision: new status, reviewer identity and time, the
/// decision reason, and an optional audit note appended to the comments.
///
/// Any status can be set from any status. The request history lives in the
/// appended comment trail, not in a transition table.
#[tracing::instrument(skip(pool, reason, additional_comment))]
pub async fn update_status(
    pool: &PgPool,
    request_uuid: Uuid,
    new_status: RequestStatus,
    reason: Option<&str>,
    additional_comment: Option<&str>,
    reviewed_by: Uuid,
    reviewed_at: DateTime<Utc>,
) -> Result<PortalRequest, RequestWriteError> {
    let mut transaction = pool.begin().await?;

    let current = sqlx::query_as::<_, PortalRequest>(
        r#"
        SELECT * FROM portal_requests
        WHERE uuid = $1 AND deleted_at IS NULL
        FOR UPDATE
        "#,
    )
    .bind(request_uuid)
    .fetch_optional(&mut *transaction)
    .await?
    .ok_or(RequestWriteError::NotFound)?;

    let comments = match additional_comment {
        Some(comment) => Some(append_status_comment(
            current.comments.as_deref(),
            reviewed_at,
            comment,
        )),
        None => current.comments.clone(),
    };

    let updated = sqlx::query_as::<_, PortalRequest>(
        r#"
        UPDATE portal_requests
        SET status = $1,
            reason = $2,
            reviewed_at = $3,
            reviewed_by = $4,
            comments = $5,
            updated_at = now()
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(new_status)
    .bind(reason)
    .bind(reviewed_at)
    .bind(reviewed_by)
    .bind(comments)
    .bind(current.id)
    .fetch_one(transaction.as_mut())
    .await?;

    transaction.commit().await?;

    Ok(updated)
}
