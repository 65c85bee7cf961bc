use crate::api::context::ApiContext;
use crate::api::util::error_detail;
use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{NaiveDate, Utc};
use model::portal::{CollaboratorStatus, NewCollaborator};
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::collaborators::add_collaborator::add_collaborator;
use portal_db_client::portals::get_portal::get_portal;
use portal_db_client::users::get_user::get_user;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    portal_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CollaboratorPayload {
    /// The collaborating user
    pub user_id: Uuid,
    /// Grant status. Defaults to active.
    pub status: Option<CollaboratorStatus>,
    /// When the collaboration starts
    pub start_date: NaiveDate,
    /// When the collaboration ends, if bounded
    pub end_date: Option<NaiveDate>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Grants a user collaboration on a portal. A user may hold several
/// grants over time, each with its own date range.
#[utoipa::path(
    post,
    tag = "portals",
    operation_id = "add_collaborator",
    path = "/portals/{portal_id}/collaborators",
    params(
        ("portal_id" = Uuid, Path, description = "Id of the portal"),
    ),
    request_body = CollaboratorPayload,
    responses(
        (status = 201, description = "The stored grant", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "No portal carries that id", body = ApiResponse),
        (status = 422, description = "The payload was rejected", body = ApiResponse),
        (status = 500, description = "The grant could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn add_collaborator_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    Path(Params { portal_id }): Path<Params>,
    Json(payload): Json<CollaboratorPayload>,
) -> impl IntoResponse {
    if let Some(end) = payload.end_date {
        if end < payload.start_date {
            return ApiResponse::builder()
                .message("The end date must not be before the start date.")
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

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
                .message("Unable to add the collaborator.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    match get_user(&ctx.db, payload.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiResponse::builder()
                .message("The selected user does not exist.")
                .is_success(false)
                .send(StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(e) => {
            tracing::error!(error = ?e, "unable to check the user");
            return ApiResponse::builder()
                .message("Unable to add the collaborator.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    let collaborator = NewCollaborator {
        portal_id,
        user_id: payload.user_id,
        status: payload.status.unwrap_or(CollaboratorStatus::Active),
        start_date: payload.start_date,
        end_date: payload.end_date,
        notes: payload.notes,
    };

    match add_collaborator(&ctx.db, &collaborator).await {
        Ok(grant) => ApiResponse::builder()
            .message("Collaborator added successfully.")
            .data(&grant.to_response(Utc::now().date_naive()))
            .send(StatusCode::CREATED),
        Err(e) => {
            tracing::error!(error = ?e, "unable to store the collaborator");
            ApiResponse::builder()
                .message("Unable to add the collaborator.")
                .is_success(false)
                .error_detail(error_detail(ctx.environment, &e))
                .send(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
