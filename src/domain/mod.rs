//! Domain layer - Core recommendation logic and artifact contracts

pub mod artifact;
pub mod error;
pub mod recommendation;

pub use artifact::{CategoryEncoder, Classifier, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use error::DomainError;
pub use recommendation::{
    Advice, FormOptions, NumericField, Recommendation, RecommendationInput, Recommender,
    FALLBACK_MESSAGE, NUMERIC_FIELDS,
};
