use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::document::DocumentResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::documents::list_documents::list_documents_for_request;
use portal_db_client::requests::get_request::get_request_by_uuid;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    uuid: Uuid,
}

/// Lists the live documents attached to a request, oldest first.
#[utoipa::path(
    get,
    tag = "documents",
    operation_id = "list_documents",
    path = "/portal-requests/api/{uuid}/documents",
    params(
        ("uuid" = Uuid, Path, description = "Public id of the portal request"),
    ),
    responses(
        (status = 200, description = "The request's documents", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal request carries that id", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn list_documents_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Path(Params { uuid }): Path<Params>,
) -> impl IntoResponse {
    let request = match get_request_by_uuid(&ctx.db, uuid).await {
        Ok(Some(request)) => request,
        Ok(None) => {
            return ApiResponse::builder()
                .message("Portal request not found.")
                .is_success(false)
                .send(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to load the portal request");
            return ApiResponse::builder()
                .message("Unable to retrieve the documents.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match list_documents_for_request(&ctx.db, request.id).await {
        Ok(documents) => {
            let documents: Vec<DocumentResponse> = documents
                .iter()
                .map(|document| document.to_response(&ctx.public_storage_base_url))
                .collect();

            ApiResponse::builder()
                .message("Documents retrieved successfully.")
                .data(&documents)
                .send(StatusCode::OK)
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to list the request's documents");
            ApiResponse::builder()
                .message("Unable to retrieve the documents.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
