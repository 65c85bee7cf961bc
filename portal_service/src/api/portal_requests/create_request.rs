use crate::api::context::ApiContext;
use crate::api::portal_requests::forms::{self, FormError};
use crate::api::respond::ResponseStyle;
use crate::api::util::error_detail;
use axum::Extension;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use model::request::PortalRequestResponse;
use model::response::ApiResponse;
use model::user::UserContext;
use portal_db_client::portals::get_portal::get_portal;
use request_lifecycle::domain::model::{StoreRequestError, StoreRequestInput};
use request_lifecycle::domain::service::RequestLifecycleService;

/// Raises a new portal request for the calling user. The body is
/// `multipart/form-data` with `portal_id`, optional `priority` and
/// `comments` fields, and any number of `documents` file parts.
#[utoipa::path(
    post,
    tag = "portal-requests",
    operation_id = "create_request",
    path = "/portal-requests",
    responses(
        (status = 201, description = "The freshly raised request", body = ApiResponse),
        (status = 303, description = "The form submission is redirected back with a flash message"),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 422, description = "A form field was rejected", body = ApiResponse),
        (status = 500, description = "The request could not be stored", body = ApiResponse),
    )
)]
#[tracing::instrument(skip(ctx, user_context, style, multipart), fields(user_id = %user_context.user_id))]
#[axum::debug_handler(state = ApiContext)]
pub async fn create_request_handler(
    State(ctx): State<ApiContext>,
    Extension(user_context): Extension<UserContext>,
    style: ResponseStyle,
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

    let Some(portal_id) = form.portal_id else {
        return style.failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "A portal must be selected.",
            None,
        );
    };
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
                "Unable to create the portal request.",
                error_detail(ctx.environment, &e),
            );
        }
    }

    let input = StoreRequestInput {
        portal_id,
        priority: form.priority,
        comments: form.comments,
        documents: form.documents,
    };

    match ctx.lifecycle.store_request(&user_context, input).await {
        Ok(request) => style.success(
            StatusCode::CREATED,
            "Portal request created successfully.",
            &PortalRequestResponse::from(request),
        ),
        Err(e @ StoreRequestError::EmptyDocument(_)) => {
            style.failure(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string(), None)
        }
        Err(StoreRequestError::StorageLayerError(e)) => {
            tracing::error!(error = ?e, "unable to store the portal request");
            style.failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to create the portal request.",
                error_detail(ctx.environment, &e),
            )
        }
    }
}
