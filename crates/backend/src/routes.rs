use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;

/// Route configuration for the whole application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Store Layout Dashboard
        .route(
            "/api/associations",
            get(handlers::d100_associations::get_associations),
        )
        // Built frontend and the out-of-band chart images
        .fallback_service(ServeDir::new("dist"))
}
