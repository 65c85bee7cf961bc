use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use model::portal::CollaboratorResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::collaborators::list_collaborators::list_collaborators;
use portal_db_client::portals::get_portal::get_portal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    portal_id: Uuid,
}

/// Lists every collaboration grant on a portal, earliest start first.
/// Each grant carries a `has_ended` flag resolved against today's date.
#[utoipa::path(
    get,
    tag = "portals",
    operation_id = "list_collaborators",
    path = "/portals/{portal_id}/collaborators",
    params(
        ("portal_id" = Uuid, Path, description = "Id of the portal"),
    ),
    responses(
        (status = 200, description = "The portal's collaboration grants", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal carries that id", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn list_collaborators_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Path(Params { portal_id }): Path<Params>,
) -> impl IntoResponse {
    match get_portal(&ctx.db, portal_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiResponse::builder()
                .message("Portal not found.")
                .is_success(false)
                .send(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to check the portal");
            return ApiResponse::builder()
                .message("Unable to retrieve the collaborators.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    match list_collaborators(&ctx.db, portal_id).await {
        Ok(grants) => {
            let today = Utc::now().date_naive();
            let grants: Vec<CollaboratorResponse> = grants
                .iter()
                .map(|grant| grant.to_response(today))
                .collect();

            ApiResponse::builder()
                .message("Collaborators retrieved successfully.")
                .data(&grants)
                .send(StatusCode::OK)
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to list the portal's collaborators");
            ApiResponse::builder()
                .message("Unable to retrieve the collaborators.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
