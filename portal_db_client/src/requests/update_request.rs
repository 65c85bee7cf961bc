use model::document::NewDocument;
use model::request::{PortalRequest, UpdateRequestFields};
use sqlx::PgPool;
use uuid::Uuid;

use crate::Parameters;
use crate::documents::add_document::insert_document;
use crate::requests::RequestWriteError;

/// Apply partial edits to a request and optionally attach new documents,
/// all in one transaction.
///
/// The row is locked and its status re-checked under the lock, so an edit
/// cannot land after a reviewer has moved the request out of the editable
/// states.
#[tracing::instrument(skip(pool, fields, documents))]
pub async fn update_request(
    pool: &PgPool,
    request_uuid: Uuid,
    fields: &UpdateRequestFields,
    documents: &[NewDocument],
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

    if !current.is_editable() {
        return Err(RequestWriteError::EditLocked(current.status));
    }

    let mut set_parts: Vec<String> = Vec::new();
    let mut params: Vec<Parameters> = Vec::new();

    if let Some(portal_id) = fields.portal_id {
        set_parts.push(format!("portal_id = ${}", params.len() + 1));
        params.push(Parameters::Uuid(portal_id));
    }

    if let Some(priority) = fields.priority {
        set_parts.push(format!("priority = ${}", params.len() + 1));
        params.push(Parameters::Priority(priority));
    }

    if let Some(comments) = fields.comments.clone() {
        set_parts.push(format!("comments = ${}", params.len() + 1));
        params.push(Parameters::String(comments));
    }

    set_parts.push("updated_at = now()".to_string());

    let query_string = format!(
        r#"
        UPDATE portal_requests
        SET {}
        WHERE id = ${}
        RETURNING *
        "#,
        set_parts.join(", "),
        params.len() + 1
    );

    let mut query = sqlx::query_as::<_, PortalRequest>(&query_string);

    for param in params {
        query = match param {
            Parameters::Uuid(value) => query.bind(value),
            Parameters::Priority(value) => query.bind(value),
            Parameters::String(value) => query.bind(value),
        };
    }

    let updated = query
        .bind(current.id)
        .fetch_one(transaction.as_mut())
        .await?;

    for document in documents {
        insert_document(&mut transaction, updated.id, document).await?;
    }

    transaction.commit().await?;

    Ok(updated)
}
