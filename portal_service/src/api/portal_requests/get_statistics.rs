use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{NaiveDate, Utc};
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::statistics::{StatisticsScope, get_request_statistics};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Params {
    /// Restrict the statistics to this portal
    portal_id: Option<Uuid>,
    /// Only count requests created on or after this date (YYYY-MM-DD)
    start_date: Option<NaiveDate>,
    /// Only count requests created on or before this date (YYYY-MM-DD)
    end_date: Option<NaiveDate>,
}

/// Aggregated request statistics: totals per status, the approval rate,
/// the priority distribution, and a six month submission trend.
#[utoipa::path(
    get,
    tag = "portal-requests",
    operation_id = "get_statistics",
    path = "/portal-requests/api/statistics",
    params(Params),
    responses(
        (status = 200, description = "The aggregated figures", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 422, description = "The date range was rejected", body = ApiResponse),
        (status = 500, description = "The aggregation failed", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, params), fields(user_id=?user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn get_statistics_handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    Query(params): Query<Params>,
) -> impl IntoResponse {
    if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
        if end < start {
            return ApiResponse::builder()
                .message("The end date must not be before the start date.")
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    let scope = StatisticsScope {
        portal_id: params.portal_id,
        start_date: params.start_date,
        end_date: params.end_date,
    };

    match get_request_statistics(&ctx.db, &scope, Utc::now().date_naive()).await {
        Ok(statistics) => ApiResponse::builder()
            .message("Statistics retrieved successfully.")
            .data(&statistics)
            .send(StatusCode::OK),
        Err(e) => {
            tracing::error!(error = ?e, "unable to aggregate request statistics");
            ApiResponse::builder()
                .message("Unable to retrieve statistics.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
