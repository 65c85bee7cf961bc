use crate::api::context::ApiContext;
use crate::api::portals::create_portal::PortalPayload;
use crate::api::util::error_detail;
use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::portal::PortalResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::PortalWriteError;
use portal_db_client::portals::update_portal::update_portal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    portal_id: Uuid,
}

/// Replaces every editable field of a portal. Fields left out of the body
/// fall back to their defaults, not to their stored values.
#[utoipa::path(
    put,
    tag = "portals",
    operation_id = "update_portal",
    path = "/portals/{portal_id}",
    params(
        ("portal_id" = Uuid, Path, description = "Id of the portal"),
    ),
    request_body = PortalPayload,
    responses(
        (status = 200, description = "The portal after the update", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal carries that id", body = ApiResponse),
        (status = 422, description = "The payload was rejected", body = ApiResponse),
        (status = 500, description = "The update could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn update_portal_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Path(Params { portal_id }): Path<Params>,
    Json(payload): Json<PortalPayload>,
) -> impl IntoResponse {
    let fields = match payload.into_fields(user_context.user_id) {
        Ok(fields) => fields,
        Err(message) => {
            return ApiResponse::builder()
                .message(&message)
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match update_portal(&ctx.db, portal_id, &fields).await {
        Ok(portal) => ApiResponse::builder()
            .message("Portal updated successfully.")
            .data(&PortalResponse::from(portal))
            .send(StatusCode::OK),
        Err(PortalWriteError::NotFound) => ApiResponse::builder()
            .message("Portal not found.")
            .is_success(false)
            .send(StatusCode::NOT_FOUND),
        Err(PortalWriteError::Database(e)) => {
            tracing::error!(error = ?e, "unable to update the portal");
            ApiResponse::builder()
                .message("Unable to update the portal.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
