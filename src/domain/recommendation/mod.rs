//! Recommendation domain - Form input, curated advice and the recommendation flow

mod advice;
mod input;
mod service;

pub use advice::{curated_labels, image_for, tip_for, Advice, FALLBACK_MESSAGE};
pub use input::{NumericField, RecommendationInput, NUMERIC_FIELDS};
pub use service::{FormOptions, Recommendation, Recommender};
