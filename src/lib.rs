pub mod dto;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

use axum::{
    Router,
    routing::{any, delete, get, post, put},
};

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use handlers::rest;
use service::NoteService;

/// Builds the full application router: the notes REST surface nested
/// under `/api`, the Swagger UI, and request tracing.
pub fn api_router(service: Arc<NoteService>) -> Router {
    let rest_router = Router::new()
        .route("/", get(rest::root))
        .route("/notes", post(rest::create_note))
        .route("/notes/{id}", put(rest::update_note))
        .route("/notes/{id}", delete(rest::delete_note))
        .route("/notes/{id}", get(rest::get_one_note))
        .route("/notes", get(rest::get_all_notes))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .config(utoipa_swagger_ui::Config::new([
                    "/api/api-doc/openapi.json",
                ]))
                .url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .with_state(service);

    Router::new()
        .route("/", any(rest::root))
        .nest("/api", rest_router)
        .layer(TraceLayer::new_for_http())
}
