use axum::http::{header, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::shared::config::Config;

/// Builds the application router.
///
/// `/health` answers liveness probes, `/error` exercises the HTTP error
/// path, everything else falls through to the built dashboard assets.
pub fn configure_routes(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health_check))
        .route("/error", get(error_probe))
        .fallback_service(ServeDir::new(&config.server.dist_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> &'static str {
    "ok"
}

/// Manual probe for the JSON error responses the server produces.
async fn error_probe() -> Result<&'static str, AppError> {
    Err(AppError::BadRequest("Test error".to_string()))
}
