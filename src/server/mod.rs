//! Export backend: `POST /create-pdf` renders a document, `GET /health` reports liveness.

pub mod config;
pub mod error;
pub mod handler;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{Config, ServerConfig};
pub use error::ServiceError;

pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/create-pdf", post(handler::create_pdf))
        .route("/health", get(handler::health_check))
        .layer(DefaultBodyLimit::max(config.max_request_bytes()))
        // the editor is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
