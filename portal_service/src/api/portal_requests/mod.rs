use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod add_document;
pub mod create_request;
pub mod delete_document;
pub mod forms;
pub mod get_request;
pub mod get_statistics;
pub mod list_documents;
pub mod list_requests;
pub mod my_requests;
pub mod update_request;
pub mod update_status;

use crate::api::context::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_requests::list_requests_handler))
        .route("/", post(create_request::create_request_handler))
        .route("/my/requests", get(my_requests::my_requests_handler))
        .route(
            "/api/statistics",
            get(get_statistics::get_statistics_handler),
        )
        .route(
            "/api/:uuid/documents",
            get(list_documents::list_documents_handler),
        )
        .route(
            "/api/:uuid/documents",
            post(add_document::add_document_handler),
        )
        .route(
            "/api/:uuid/documents/:document_id",
            delete(delete_document::delete_document_handler),
        )
        .route("/:uuid", get(get_request::get_request_handler))
        .route("/:uuid", put(update_request::update_request_handler))
        .route("/:uuid/status", put(update_status::update_status_handler))
}
