use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::PortalWriteError;
use portal_db_client::portals::delete_portal::delete_portal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    portal_id: Uuid,
}

/// Retires a portal. The row is soft-deleted; its requests and their
/// documents stay in place for the audit trail.
#[utoipa::path(
    delete,
    tag = "portals",
    operation_id = "delete_portal",
    path = "/portals/{portal_id}",
    params(
        ("portal_id" = Uuid, Path, description = "Id of the portal"),
    ),
    responses(
        (status = 200, description = "The portal was retired", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal carries that id", body = ApiResponse),
        (status = 500, description = "The removal failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn delete_portal_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Path(Params { portal_id }): Path<Params>,
) -> impl IntoResponse {
    match delete_portal(&ctx.db, portal_id).await {
        Ok(()) => ApiResponse::builder()
            .message("Portal deleted successfully.")
            .send(StatusCode::OK),
        Err(PortalWriteError::NotFound) => ApiResponse::builder()
            .message("Portal not found.")
            .is_success(false)
            .send(StatusCode::NOT_FOUND),
        Err(PortalWriteError::Database(e)) => {
            tracing::error!(error = ?e, "unable to delete the portal");
            ApiResponse::builder()
                .message("Unable to delete the portal.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
