use crate::api::context::ApiContext;
use crate::constants::ORIGINS;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::{Router, middleware::from_fn_with_state, routing::IntoMakeService};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod context;
mod health;
pub mod middleware;
mod portal_requests;
mod portals;
mod respond;
mod swagger;
mod util;

type Service = IntoMakeService<Router>;

pub fn service(app_state: ApiContext, max_upload_bytes: usize) -> Service {
    let cors = CorsLayer::new()
        .allow_credentials(true)
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE])
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(ORIGINS);

    let app = Router::new()
        .nest("/portal-requests", portal_requests::router())
        .nest("/portals", portals::router())
        .layer(from_fn_with_state(app_state.clone(), middleware::handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(app_state)
        .merge(health::router().layer(cors.clone()))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()),
        )
        .layer(cors.clone())
        .layer(TraceLayer::new_for_http());

    app.into_make_service()
}
