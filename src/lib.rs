use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use std::env;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod db;
pub mod entities;
pub mod error;
pub mod routes;
pub mod store;

use routes::causes::{get_cause, list_causes};
use routes::contact::submit_contact;
use routes::donations::submit_donation;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = String))
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CauseHub API",
        version = "0.1.0",
        description = "Donation platform: causes, donations and contact messages"
    ),
    paths(
        routes::causes::list_causes,
        routes::causes::get_cause,
        routes::donations::submit_donation,
        routes::contact::submit_contact,
        health_check
    ),
    components(schemas(
        entities::cause::Model,
        routes::donations::DonationRequest,
        routes::donations::DonationResponse,
        routes::contact::ContactRequest,
        routes::contact::ContactResponse
    ))
)]
struct ApiDoc;

/// Create the application with all routes and middleware. The database
/// handle is established at startup and injected here; nothing in the app
/// connects lazily.
pub fn create_app(db: DatabaseConnection) -> Router {
    // --- API routes, all sharing the connection as state ---
    let api_routes = Router::new()
        .route("/causes", get(list_causes))
        .route("/causes/{id}", get(get_cause))
        .route("/donations", post(submit_donation))
        .route("/contact", post(submit_contact))
        .route("/health", get(health_check))
        .with_state(db);

    let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // --- SPA assets: any non-API path falls through to the built frontend,
    // with index.html as the catch-all so client-side routing works ---
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "frontend/dist".to_string());
    let index = Path::new(&static_dir).join("index.html");
    let spa = ServeDir::new(&static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .nest("/api", api_routes)
        .merge(docs_router)
        .fallback_service(spa)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
