use crate::api::context::ApiContext;
use crate::api::portal_requests::forms::{self, FormError};
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use request_lifecycle::domain::model::AddDocumentError;
use request_lifecycle::domain::service::RequestLifecycleService;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    uuid: Uuid,
}

/// Attaches one document to an open request. The body is
/// `multipart/form-data` with a single `document` file part. Only the
/// submitter may attach, and only while the request is editable.
#[utoipa::path(
    post,
    tag = "documents",
    operation_id = "add_document",
    path = "/portal-requests/api/{uuid}/documents",
    params(
        ("uuid" = Uuid, Path, description = "Public id of the portal request"),
    ),
    responses(
        (status = 201, description = "The stored document", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 403, description = "The caller may not attach documents to this request", body = ApiResponse),
        (status = 404, description = "No portal request carries that id", body = ApiResponse),
        (status = 422, description = "The upload was rejected", body = ApiResponse),
        (status = 500, description = "The upload could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, multipart), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn add_document_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Path(Params { uuid }): Path<Params>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let upload = match forms::read_document_form(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return ApiResponse::builder()
                .message("A document file is required.")
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(FormError::Invalid(message)) => {
            return ApiResponse::builder()
                .message(&message)
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(FormError::Unreadable(e)) => {
            tracing::warn!(error = ?e, "unable to read the document form");
            return ApiResponse::builder()
                .message("The form submission could not be read.")
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match ctx.lifecycle.add_document(&user_context, uuid, upload).await {
        Ok(document) => ApiResponse::builder()
            .message("Document uploaded successfully.")
            .data(&document.to_response(&ctx.public_storage_base_url))
            .send(StatusCode::CREATED),
        Err(AddDocumentError::RequestNotFound) => ApiResponse::builder()
            .message("Portal request not found.")
            .is_success(false)
            .send(StatusCode::NOT_FOUND),
        Err(e @ (AddDocumentError::NotOwner | AddDocumentError::EditLocked(_))) => {
            ApiResponse::builder()
                .message(&e.to_string())
                .is_success(false)
                .send(StatusCode::FORBIDDEN)
        }
        Err(e @ AddDocumentError::EmptyDocument(_)) => ApiResponse::builder()
            .message(&e.to_string())
            .is_success(false)
            .send(StatusCode::UNPROCESSABLE_ENTITY),
        Err(AddDocumentError::StorageLayerError(e)) => {
            tracing::error!(error = ?e, "unable to store the document");
            ApiResponse::builder()
                .message("Unable to upload the document.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
