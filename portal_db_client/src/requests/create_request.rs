use model::document::NewDocument;
use model::request::{NewPortalRequest, PortalRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::documents::add_document::insert_document;

/// Insert a request and all of its document rows in one transaction.
///
/// Status is not a parameter: the column default makes every new request
/// `Pending` no matter what the caller wanted. Any failure rolls the whole
/// creation back.
#[tracing::instrument(skip(pool, new_request, documents), fields(uuid = %new_request.uuid))]
pub async fn create_request(
    pool: &PgPool,
    new_request: &NewPortalRequest,
    documents: &[NewDocument],
) -> Result<PortalRequest, sqlx::Error> {
    let mut transaction = pool.begin().await?;

    let request = sqlx::query_as::<_, PortalRequest>(
        r#"
        INSERT INTO portal_requests (id, portal_id, submitted_by, priority, uuid, comments)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(new_request.portal_id)
    .bind(new_request.submitted_by)
    .bind(new_request.priority)
    .bind(new_request.uuid)
    .bind(new_request.comments.as_deref())
    .fetch_one(&mut *transaction)
    .await?;

    for document in documents {
        insert_document(&mut transaction, request.id, document).await?;
    }

    transaction.commit().await?;

    Ok(request)
}
