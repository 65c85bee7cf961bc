use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::portal::PortalResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::get_portal::get_portal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    portal_id: Uuid,
}

#[utoipa::path(
    get,
    tag = "portals",
    operation_id = "get_portal",
    path = "/portals/{portal_id}",
    params(
        ("portal_id" = Uuid, Path, description = "Id of the portal"),
    ),
    responses(
        (status = 200, description = "The portal", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal carries that id", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn get_portal_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Path(Params { portal_id }): Path<Params>,
) -> impl IntoResponse {
    match get_portal(&ctx.db, portal_id).await {
        Ok(Some(portal)) => ApiResponse::builder()
            .message("Portal retrieved successfully.")
            .data(&PortalResponse::from(portal))
            .send(StatusCode::OK),
        Ok(None) => ApiResponse::builder()
            .message("Portal not found.")
            .is_success(false)
            .send(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(error = ?e, "unable to load the portal");
            ApiResponse::builder()
                .message("Unable to retrieve the portal.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
