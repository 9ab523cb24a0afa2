//! Recommendation endpoint handlers

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, OptionsResponse, RecommendationResponse};
use crate::domain::RecommendationInput;

/// GET /v1/options
pub async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::from(state.form_options()))
}

/// POST /v1/recommendations
pub async fn create_recommendation(
    State(state): State<AppState>,
    Json(input): Json<RecommendationInput>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    debug!(soil_color = %input.soil_color, crop = %input.crop, "Creating recommendation");

    let recommendation = state.recommend(&input).map_err(ApiError::from)?;

    Ok(Json(RecommendationResponse::from(recommendation)))
}
