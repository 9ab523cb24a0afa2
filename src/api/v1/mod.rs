//! Versioned JSON API

pub mod recommendations;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/options", get(recommendations::get_options))
        .route(
            "/recommendations",
            post(recommendations::create_recommendation),
        )
}
