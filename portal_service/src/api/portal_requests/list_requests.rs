use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::pagination::{PageParams, SortDirection};
use model::request::{PortalRequestResponse, RequestPriority, RequestSortField, RequestStatus};
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::requests::list_requests::{RequestFilters, list_requests};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Params {
    /// Case-insensitive needle matched against the reference, comments, portal name, submitter name and email
    search: Option<String>,
    /// Only requests raised against this portal
    portal_id: Option<Uuid>,
    /// Only requests currently in this status
    status: Option<String>,
    /// Only requests with this priority
    priority: Option<String>,
    /// Only requests submitted by this user
    submitted_by: Option<Uuid>,
    /// Sort column. Options are created_at, updated_at, priority, status, reviewed_at. Defaults to created_at.
    sort_by: Option<String>,
    /// Sort direction, asc or desc. Defaults to desc.
    sort_direction: Option<String>,
    /// 1-based page number
    page: Option<u32>,
    /// Rows per page. Defaults to 15, capped at 100.
    per_page: Option<u32>,
}

/// Lists portal requests across all submitters, filtered and paginated.
#[utoipa::path(
    get,
    tag = "portal-requests",
    operation_id = "list_requests",
    path = "/portal-requests",
    params(Params),
    responses(
        (status = 200, description = "A page of portal requests", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 422, description = "A filter value was not understood", body = ApiResponse),
        (status = 500, description = "The lookup failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, params), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn list_requests_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Query(params): Query<Params>,
) -> impl IntoResponse {
    let status = match parse_filter::<RequestStatus>(params.status.as_deref()) {
        Ok(status) => status,
        Err(message) => return unprocessable(&message),
    };
    let priority = match parse_filter::<RequestPriority>(params.priority.as_deref()) {
        Ok(priority) => priority,
        Err(message) => return unprocessable(&message),
    };
    let sort_field = match parse_filter::<RequestSortField>(params.sort_by.as_deref()) {
        Ok(field) => field.unwrap_or_default(),
        Err(message) => return unprocessable(&message),
    };
    let sort_direction = match parse_filter::<SortDirection>(params.sort_direction.as_deref()) {
        Ok(direction) => direction.unwrap_or_default(),
        Err(message) => return unprocessable(&message),
    };

    let filters = RequestFilters {
        search: params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
            .map(str::to_string),
        portal_id: params.portal_id,
        status,
        priority,
        submitted_by: params.submitted_by,
    };
    let page_params = PageParams::new(params.page, params.per_page);

    match list_requests(&ctx.db, &filters, sort_field, sort_direction, page_params).await {
        Ok(page) => ApiResponse::builder()
            .message("Portal requests retrieved successfully.")
            .data(&page.map(PortalRequestResponse::from))
            .send(StatusCode::OK),
        Err(e) => {
            tracing::error!(error = ?e, "unable to list portal requests");
            ApiResponse::builder()
                .message("Unable to retrieve portal requests.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Parses an optional textual filter, treating blank values as absent so an
/// empty `<select>` submission behaves like no filter at all.
fn parse_filter<T: std::str::FromStr>(value: Option<&str>) -> Result<Option<T>, String>
where
    T::Err: std::fmt::Display,
{
    match value.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => raw.parse().map(Some).map_err(|e: T::Err| e.to_string()),
        None => Ok(None),
    }
}

fn unprocessable(message: &str) -> axum::http::Response<axum::body::Body> {
    ApiResponse::builder()
        .message(message)
        .is_success(false)
        .send(StatusCode::UNPROCESSABLE_ENTITY)
}
