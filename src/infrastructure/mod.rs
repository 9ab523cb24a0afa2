//! Infrastructure layer - Artifact loading, logging and metrics

pub mod artifact;
pub mod logging;
pub mod observability;
