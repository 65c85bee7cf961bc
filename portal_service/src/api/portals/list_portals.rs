use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::portal::PortalResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::list_portals::list_portals;

/// Lists every live portal, newest first.
#[utoipa::path(
    get,
    tag = "portals",
    operation_id = "list_portals",
    path = "/portals",
    responses(
        (status = 200, description = "All live portals", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn list_portals_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
) -> impl IntoResponse {
    match list_portals(&ctx.db).await {
        Ok(portals) => {
            let portals: Vec<PortalResponse> =
                portals.into_iter().map(PortalResponse::from).collect();

            ApiResponse::builder()
                .message("Portals retrieved successfully.")
                .data(&portals)
                .send(StatusCode::OK)
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to list portals");
            ApiResponse::builder()
                .message("Unable to retrieve portals.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
