use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod add_collaborator;
pub mod create_portal;
pub mod delete_portal;
pub mod get_portal;
pub mod list_collaborators;
pub mod list_portals;
pub mod update_portal;

use crate::api::context::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_portals::list_portals_handler))
        .route("/", post(create_portal::create_portal_handler))
        .route("/:portal_id", get(get_portal::get_portal_handler))
        .route("/:portal_id", put(update_portal::update_portal_handler))
        .route("/:portal_id", delete(delete_portal::delete_portal_handler))
        .route(
            "/:portal_id/collaborators",
            get(list_collaborators::list_collaborators_handler),
        )
        .route(
            "/:portal_id/collaborators",
            post(add_collaborator::add_collaborator_handler),
        )
}
