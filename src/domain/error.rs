use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to load {artifact} artifact from '{path}': {message}")]
    ArtifactLoad {
        artifact: String,
        path: String,
        message: String,
    },

    #[error("Unknown {field} '{value}'")]
    UnknownCategory { field: String, value: String },

    #[error("Prediction error: {message}")]
    Prediction { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn artifact_load(
        artifact: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ArtifactLoad {
            artifact: artifact.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unknown_category(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Short machine-readable name, used as a metric label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArtifactLoad { .. } => "artifact_load",
            Self::UnknownCategory { .. } => "unknown_category",
            Self::Prediction { .. } => "prediction",
            Self::Validation { .. } => "validation",
        }
    }
}
