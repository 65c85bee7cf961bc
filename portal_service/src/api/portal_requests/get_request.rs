use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::document::DocumentResponse;
use model::request::PortalRequestResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::documents::list_documents::list_documents_for_request;
use portal_db_client::requests::get_request::get_request_details_by_uuid;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    uuid: Uuid,
}

/// A single request with its portal and submitter context plus the live
/// documents attached to it.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestWithDocuments {
    pub request: PortalRequestResponse,
    pub documents: Vec<DocumentResponse>,
}

#[utoipa::path(
    get,
    tag = "portal-requests",
    operation_id = "get_request",
    path = "/portal-requests/{uuid}",
    params(
        ("uuid" = Uuid, Path, description = "Public id of the portal request"),
    ),
    responses(
        (status = 200, description = "The portal request and its documents", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal request carries that id", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn get_request_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Path(Params { uuid }): Path<Params>,
) -> impl IntoResponse {
    let details = match get_request_details_by_uuid(&ctx.db, uuid).await {
        Ok(Some(details)) => details,
        Ok(None) => {
            return ApiResponse::builder()
                .message("Portal request not found.")
                .is_success(false)
                .send(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to load the portal request");
            return ApiResponse::builder()
                .message("Unable to retrieve the portal request.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let request_id = details.request.id;
    let documents = match list_documents_for_request(&ctx.db, request_id).await {
        Ok(documents) => documents,
        Err(e) => {
            tracing::error!(error = ?e, "unable to load the request's documents");
            return ApiResponse::builder()
                .message("Unable to retrieve the portal request.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let body = RequestWithDocuments {
        request: PortalRequestResponse::from(details),
        documents: documents
            .iter()
            .map(|document| document.to_response(&ctx.public_storage_base_url))
            .collect(),
    };

    ApiResponse::builder()
        .message("Portal request retrieved successfully.")
        .data(&body)
        .send(StatusCode::OK)
}
