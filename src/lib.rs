//! Fertilizer Advisor
//!
//! Serves a single form that collects soil and crop measurements, runs them
//! through a pre-trained classifier and shows the recommended fertilizer with a
//! usage tip. The classifier and the two label encoders are loaded once at
//! startup and shared read-only by every request.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::ArtifactConfig;
use domain::DomainError;
use infrastructure::artifact::load_artifacts;

/// Load the artifacts and build the shared application state
pub fn create_app_state(config: &ArtifactConfig) -> Result<AppState, DomainError> {
    let recommender = load_artifacts(config)?.into_recommender();

    Ok(AppState::new(Arc::new(recommender)))
}
