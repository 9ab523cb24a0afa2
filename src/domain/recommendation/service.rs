//! Recommendation service - encode, assemble, predict, advise

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::advice::Advice;
use super::input::RecommendationInput;
use crate::domain::artifact::{CategoryEncoder, Classifier, FeatureVector};
use crate::domain::error::DomainError;

/// Choice field options, read from the loaded encoders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub soil_colors: Vec<String>,
    pub crops: Vec<String>,
}

/// Outcome of one successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub fertilizer: String,
    pub advice: Advice,
}

/// Turns form submissions into fertilizer recommendations
///
/// Holds the three loaded artifacts. They are shared read-only for the life of
/// the process, so a single instance serves every request.
pub struct Recommender {
    classifier: Arc<dyn Classifier>,
    soil_encoder: Arc<dyn CategoryEncoder>,
    crop_encoder: Arc<dyn CategoryEncoder>,
}

impl Recommender {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        soil_encoder: Arc<dyn CategoryEncoder>,
        crop_encoder: Arc<dyn CategoryEncoder>,
    ) -> Self {
        Self {
            classifier,
            soil_encoder,
            crop_encoder,
        }
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            soil_colors: self.soil_encoder.classes().to_vec(),
            crops: self.crop_encoder.classes().to_vec(),
        }
    }

    /// Initial form state: first class of each encoder, numeric lower bounds
    pub fn default_input(&self) -> RecommendationInput {
        let first = |encoder: &Arc<dyn CategoryEncoder>| {
            encoder.classes().first().cloned().unwrap_or_default()
        };

        RecommendationInput::with_defaults(first(&self.soil_encoder), first(&self.crop_encoder))
    }

    pub fn soil_class_count(&self) -> usize {
        self.soil_encoder.classes().len()
    }

    pub fn crop_class_count(&self) -> usize {
        self.crop_encoder.classes().len()
    }

    pub fn classifier_features(&self) -> usize {
        self.classifier.n_features()
    }

    /// Encodes both categorical fields and lays out the row in training order
    pub fn feature_vector(&self, input: &RecommendationInput) -> Result<FeatureVector, DomainError> {
        let soil_index = self
            .soil_encoder
            .encode(&input.soil_color)
            .ok_or_else(|| DomainError::unknown_category("soil color", &input.soil_color))?;
        let crop_index = self
            .crop_encoder
            .encode(&input.crop)
            .ok_or_else(|| DomainError::unknown_category("crop", &input.crop))?;

        Ok(FeatureVector::new([
            soil_index as f64,
            input.nitrogen,
            input.phosphorus,
            input.potassium,
            input.ph,
            input.rainfall,
            input.temperature,
            crop_index as f64,
        ]))
    }

    /// Runs one submission end to end
    pub fn recommend(&self, input: &RecommendationInput) -> Result<Recommendation, DomainError> {
        input.check_bounds()?;

        let features = self.feature_vector(input)?;
        debug!(features = ?features, "Assembled feature vector");

        let fertilizer = self
            .classifier
            .predict(std::slice::from_ref(&features))?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::prediction("model returned no label"))?;

        let advice = Advice::for_label(&fertilizer);

        info!(
            fertilizer = %fertilizer,
            curated = advice.is_curated(),
            "Recommendation produced"
        );

        Ok(Recommendation { fertilizer, advice })
    }
}
