use crate::api::context::ApiContext;
use crate::api::portal_requests::forms::{self, FormError};
use crate::api::respond::ResponseStyle;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::request::{PortalRequestResponse, UpdateRequestFields};
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::get_portal::get_portal;
use request_lifecycle::domain::model::{UpdateRequestError, UpdateRequestInput};
use request_lifecycle::domain::service::RequestLifecycleService;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Params {
    uuid: Uuid,
}

/// Edits an open request. Only the submitter may edit, and only while the
/// request is pending or under review. Fields left out of the form keep
/// their stored values; file parts are attached on top of the existing
/// documents.
#[utoipa::path(
    put,
    tag = "portal-requests",
    operation_id = "update_request",
    path = "/portal-requests/{uuid}",
    params(
        ("uuid" = Uuid, Path, description = "Public id of the portal request"),
    ),
    responses(
        (status = 200, description = "The request after the edit", body = ApiResponse),
        (status = 303, description = "The form submission is redirected back with a flash message"),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 403, description = "The caller may not edit this request", body = ApiResponse),
        (status = 404, description = "No portal request carries that id", body = ApiResponse),
        (status = 422, description = "A form field was rejected", body = ApiResponse),
        (status = 500, description = "The edit could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, style, multipart), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn update_request_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    style: ResponseStyle,
    Path(Params { uuid }): Path<Params>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let form = match forms::read_request_form(&mut multipart).await {
        Ok(form) => form,
        Err(FormError::Invalid(message)) => {
            return style.failure(StatusCode::UNPROCESSABLE_ENTITY, &message, None);
        }
        Err(FormError::Unreadable(e)) => {
            tracing::warn!(error = ?e, "unable to read the request form");
            return style.failure(
                StatusCode::UNPROCESSABLE_ENTITY,
                "The form submission could not be read.",
                None,
            );
        }
    };

    if let Some(portal_id) = form.portal_id {
        match get_portal(&ctx.db, portal_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return style.failure(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "The selected portal does not exist.",
                    None,
                );
            }
            Err(e) => {
                tracing::error!(error = ?e, "unable to check the portal");
                return style.failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unable to update the portal request.",
                    error_detail(ctx.environment, &e),
                );
            }
        }
    }

    let input = UpdateRequestInput {
        fields: UpdateRequestFields {
            portal_id: form.portal_id,
            priority: form.priority,
            comments: form.comments,
        },
        documents: form.documents,
    };

    match ctx.lifecycle.update_request(&user_context, uuid, input).await {
        Ok(request) => style.success(
            StatusCode::OK,
            "Portal request updated successfully.",
            &PortalRequestResponse::from(request),
        ),
        Err(UpdateRequestError::RequestNotFound) => {
            style.failure(StatusCode::NOT_FOUND, "Portal request not found.", None)
        }
        Err(e @ (UpdateRequestError::NotOwner | UpdateRequestError::EditLocked(_))) => {
            style.failure(StatusCode::FORBIDDEN, &e.to_string(), None)
        }
        Err(e @ UpdateRequestError::EmptyDocument(_)) => {
            style.failure(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string(), None)
        }
        Err(UpdateRequestError::StorageLayerError(e)) => {
            tracing::error!(error = ?e, "unable to apply the request edit");
            style.failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to update the portal request.",
                error_detail(ctx.environment, &e),
            )
        }
    }
}
