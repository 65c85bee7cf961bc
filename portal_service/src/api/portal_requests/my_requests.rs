use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::pagination::{PageParams, SortDirection};
use model::request::{PortalRequestResponse, RequestSortField};
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::requests::list_requests::{RequestFilters, list_requests};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Params {
    /// 1-based page number
    page: Option<u32>,
    /// Rows per page. Defaults to 15, capped at 100.
    per_page: Option<u32>,
}

/// Lists the calling user's own requests, newest first. The submitter scope
/// comes from the authenticated context, never from the query string.
#[utoipa::path(
    get,
    tag = "portal-requests",
    operation_id = "my_requests",
    path = "/portal-requests/my/requests",
    params(Params),
    responses(
        (status = 200, description = "A page of the caller's requests", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, params), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn my_requests_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Query(params): Query<Params>,
) -> impl IntoResponse {
    let filters = RequestFilters {
        submitted_by: Some(user_context.user_id),
        ..RequestFilters::default()
    };
    let page_params = PageParams::new(params.page, params.per_page);

    match list_requests(
        &ctx.db,
        &filters,
        RequestSortField::CreatedAt,
        SortDirection::Desc,
        page_params,
    )
    .await
    {
        Ok(page) => ApiResponse::builder()
            .message("Portal requests retrieved successfully.")
            .data(&page.map(PortalRequestResponse::from))
            .send(StatusCode::OK),
        Err(e) => {
            tracing::error!(error = ?e, "unable to list the user's portal requests");
            ApiResponse::builder()
                .message("Unable to retrieve portal requests.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
