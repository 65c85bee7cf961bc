use crate::api::context::ApiContext;
use crate::api::respond::ResponseStyle;
use crate::api::util::error_detail;
use axum::Extension;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::request::{PortalRequestResponse, RequestStatus};
use model::response::ApiResponse;
use model::user::UserContext;
use request_lifecycle::domain::model::{StatusUpdateInput, UpdateStatusError};
use request_lifecycle::domain::service::RequestLifecycleService;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    uuid: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusBody {
    /// The status to move the request to
    pub status: String,
    /// The reviewer's reason for the decision
    pub reason: Option<String>,
    /// A note appended to the request's comment trail
    pub additional_comment: Option<String>,
}

/// Records a reviewer decision on a request. Requires the review
/// permission; the decision may move the request to any status.
#[utoipa::path(
    put,
    tag = "portal-requests",
    operation_id = "update_status",
    path = "/portal-requests/{uuid}/status",
    params(
        ("uuid" = Uuid, Path, description = "Public id of the portal request"),
    ),
    request_body = UpdateStatusBody,
    responses(
        (status = 200, description = "The request after the decision", body = ApiResponse),
        (status = 303, description = "The form submission is redirected back with a flash message"),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 403, description = "The caller may not review requests", body = ApiResponse),
        (status = 404, description = "No portal request carries that id", body = ApiResponse),
        (status = 422, description = "The decision was rejected", body = ApiResponse),
        (status = 500, description = "The decision could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, style, body), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn update_status_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    style: ResponseStyle,
    Path(Params { uuid }): Path<Params>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return style.failure(
                StatusCode::UNPROCESSABLE_ENTITY,
                &rejection.body_text(),
                None,
            );
        }
    };

    let status = match body.status.trim().parse::<RequestStatus>() {
        Ok(status) => status,
        Err(e) => {
            return style.failure(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string(), None);
        }
    };

    let input = StatusUpdateInput {
        status,
        reason: cleaned(body.reason),
        additional_comment: cleaned(body.additional_comment),
    };

    match ctx.lifecycle.update_status(&user_context, uuid, input).await {
        Ok(request) => style.success(
            StatusCode::OK,
            "Request status updated successfully.",
            &PortalRequestResponse::from(request),
        ),
        Err(e @ UpdateStatusError::MissingReviewPermission) => {
            style.failure(StatusCode::FORBIDDEN, &e.to_string(), None)
        }
        Err(UpdateStatusError::RequestNotFound) => {
            style.failure(StatusCode::NOT_FOUND, "Portal request not found.", None)
        }
        Err(UpdateStatusError::StorageLayerError(e)) => {
            tracing::error!(error = ?e, "unable to record the review decision");
            style.failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to update the request status.",
                error_detail(ctx.environment, &e),
            )
        }
    }
}

/// Trims free-text fields and folds blank submissions to `None`.
fn cleaned(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_reasons_are_dropped() {
        assert_eq!(cleaned(Some("   ".to_string())), None);
        assert_eq!(cleaned(None), None);
    }

    #[test]
    fn reasons_are_trimmed() {
        assert_eq!(
            cleaned(Some("  out of capacity \n".to_string())),
            Some("out of capacity".to_string())
        );
    }
}
