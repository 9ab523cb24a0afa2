//! Application state shared by every handler

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use crate::domain::{DomainError, FormOptions, Recommendation, RecommendationInput, Recommender};
use crate::infrastructure::observability::{record_recommendation, record_recommendation_failure};

/// Read-only state built once at startup
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(recommender: Arc<Recommender>) -> Self {
        Self { recommender }
    }

    pub fn form_options(&self) -> FormOptions {
        self.recommender.form_options()
    }

    /// Runs one submission and records its outcome
    pub fn recommend(&self, input: &RecommendationInput) -> Result<Recommendation, DomainError> {
        let start = Instant::now();

        match self.recommender.recommend(input) {
            Ok(recommendation) => {
                record_recommendation(
                    &recommendation.fertilizer,
                    recommendation.advice.is_curated(),
                    start.elapsed(),
                );
                Ok(recommendation)
            }
            Err(err) => {
                warn!(error = %err, kind = err.kind(), "Recommendation failed");
                record_recommendation_failure(err.kind());
                Err(err)
            }
        }
    }
}
