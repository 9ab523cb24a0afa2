use std::path::Path;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::pages;
use super::state::AppState;
use super::v1;

/// Create the full router: form page, JSON API, health probes and images
pub fn create_router(state: AppState, images_dir: &Path) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Form page
        .route("/", get(pages::show_form).post(pages::submit_form))
        // JSON API
        .nest("/v1", v1::create_v1_router())
        // Tip images
        .nest_service("/images", ServeDir::new(images_dir))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
