use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use request_lifecycle::domain::model::DeleteDocumentError;
use request_lifecycle::domain::service::RequestLifecycleService;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    uuid: Uuid,
    document_id: Uuid,
}

/// Removes a document from an open request. The stored file is cleared
/// from the bucket and the row stops appearing in listings.
#[utoipa::path(
    delete,
    tag = "documents",
    operation_id = "delete_document",
    path = "/portal-requests/api/{uuid}/documents/{document_id}",
    params(
        ("uuid" = Uuid, Path, description = "Public id of the portal request"),
        ("document_id" = Uuid, Path, description = "Id of the document"),
    ),
    responses(
        (status = 200, description = "The document was removed", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 403, description = "The caller may not remove documents from this request", body = ApiResponse),
        (status = 404, description = "The request or document does not exist", body = ApiResponse),
        (status = 500, description = "The removal failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn delete_document_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Path(Params { uuid, document_id }): Path<Params>,
) -> impl IntoResponse {
    match ctx
        .lifecycle
        .delete_document(&user_context, uuid, document_id)
        .await
    {
        Ok(()) => ApiResponse::builder()
            .message("Document deleted successfully.")
            .send(StatusCode::OK),
        Err(DeleteDocumentError::RequestNotFound) => ApiResponse::builder()
            .message("Portal request not found.")
            .is_success(false)
            .send(StatusCode::NOT_FOUND),
        Err(DeleteDocumentError::DocumentNotFound) => ApiResponse::builder()
            .message("Document not found.")
            .is_success(false)
            .send(StatusCode::NOT_FOUND),
        Err(e @ (DeleteDocumentError::NotOwner | DeleteDocumentError::EditLocked(_))) => {
            ApiResponse::builder()
                .message(&e.to_string())
                .is_success(false)
                .send(StatusCode::FORBIDDEN)
        }
        Err(DeleteDocumentError::StorageLayerError(e)) => {
            tracing::error!(error = ?e, "unable to delete the document");
            ApiResponse::builder()
                .message("Unable to delete the document.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
