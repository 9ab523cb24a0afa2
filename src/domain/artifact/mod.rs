//! Artifact domain - Contracts for the pre-trained model and label encoders
//!
//! The artifacts are produced by an offline training pipeline. The service only
//! relies on the narrow surface below, so the concrete storage format stays an
//! infrastructure concern.

mod feature;

pub use feature::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// A fitted categorical-to-index mapping with a fixed set of known classes
pub trait CategoryEncoder: Send + Sync {
    /// Known classes, in index order
    fn classes(&self) -> &[String];

    /// Index of `value` among the known classes, `None` when it was never fitted
    fn encode(&self, value: &str) -> Option<usize>;
}

/// A trained classifier mapping feature rows to fertilizer labels
#[cfg_attr(test, automock)]
pub trait Classifier: Send + Sync {
    /// Number of features each row must carry
    fn n_features(&self) -> usize;

    /// Predicts one label per row
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<String>, DomainError>;
}
