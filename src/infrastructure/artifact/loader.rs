//! Startup loading of the three artifacts

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::{LabelEncoder, TreeEnsembleClassifier};
use crate::config::ArtifactConfig;
use crate::domain::{CategoryEncoder, Classifier, DomainError, Recommender, FEATURE_COUNT};

/// The loaded, read-only artifacts
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub classifier: Arc<TreeEnsembleClassifier>,
    pub soil_encoder: Arc<LabelEncoder>,
    pub crop_encoder: Arc<LabelEncoder>,
}

impl Artifacts {
    pub fn into_recommender(self) -> Recommender {
        Recommender::new(self.classifier, self.soil_encoder, self.crop_encoder)
    }
}

/// Loads the model and both encoders. Any failure is fatal for startup.
pub fn load_artifacts(config: &ArtifactConfig) -> Result<Artifacts, DomainError> {
    let classifier: TreeEnsembleClassifier = load_json("model", &config.model_path)?;
    info!(
        path = %config.model_path.display(),
        trees = classifier.tree_count(),
        classes = classifier.classes().len(),
        n_features = classifier.n_features(),
        "Loaded model artifact"
    );

    if classifier.n_features() != FEATURE_COUNT {
        warn!(
            expected = FEATURE_COUNT,
            actual = classifier.n_features(),
            "Model feature count differs from the form layout; every prediction will fail"
        );
    }

    let soil_encoder: LabelEncoder = load_json("soil encoder", &config.soil_encoder_path)?;
    info!(
        path = %config.soil_encoder_path.display(),
        classes = soil_encoder.classes().len(),
        "Loaded soil encoder artifact"
    );

    let crop_encoder: LabelEncoder = load_json("crop encoder", &config.crop_encoder_path)?;
    info!(
        path = %config.crop_encoder_path.display(),
        classes = crop_encoder.classes().len(),
        "Loaded crop encoder artifact"
    );

    Ok(Artifacts {
        classifier: Arc::new(classifier),
        soil_encoder: Arc::new(soil_encoder),
        crop_encoder: Arc::new(crop_encoder),
    })
}

fn load_json<T: DeserializeOwned>(artifact: &str, path: &Path) -> Result<T, DomainError> {
    let display = path.display().to_string();

    let bytes = std::fs::read(path)
        .map_err(|e| DomainError::artifact_load(artifact, &display, e.to_string()))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::artifact_load(artifact, &display, e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::RecommendationInput;

    fn demo_config() -> ArtifactConfig {
        let demos = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos");

        ArtifactConfig {
            model_path: demos.join("fertilizer_recommendation_model.json"),
            soil_encoder_path: demos.join("le_soil.json"),
            crop_encoder_path: demos.join("le_crop.json"),
            images_dir: demos.join("images"),
        }
    }

    fn scratch_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("artifact-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_demo_artifacts() {
        let artifacts = load_artifacts(&demo_config()).unwrap();

        assert_eq!(artifacts.classifier.n_features(), FEATURE_COUNT);
        assert_eq!(
            artifacts.soil_encoder.classes(),
            ["Black", "Clayey", "Loamy", "Red", "Sandy"]
        );
        assert_eq!(
            artifacts.crop_encoder.classes(),
            ["Cotton", "Maize", "Rice", "Sugarcane", "Wheat"]
        );
    }

    #[test]
    fn test_demo_artifacts_recommend_urea() {
        let recommender = load_artifacts(&demo_config()).unwrap().into_recommender();
        let input = RecommendationInput {
            soil_color: "Black".to_string(),
            nitrogen: 80.0,
            phosphorus: 40.0,
            potassium: 40.0,
            ph: 6.5,
            rainfall: 200.0,
            temperature: 25.0,
            crop: "Wheat".to_string(),
        };

        let recommendation = recommender.recommend(&input).unwrap();

        assert_eq!(recommendation.fertilizer, "Urea");
        assert_eq!(recommendation.advice.image(), Some("images/urea.jpg"));
    }

    #[test]
    fn test_demo_artifacts_recommend_uncurated_label() {
        let recommender = load_artifacts(&demo_config()).unwrap().into_recommender();
        let input = RecommendationInput {
            soil_color: "Red".to_string(),
            nitrogen: 20.0,
            phosphorus: 20.0,
            potassium: 30.0,
            ph: 7.0,
            rainfall: 50.0,
            temperature: 30.0,
            crop: "Cotton".to_string(),
        };

        let recommendation = recommender.recommend(&input).unwrap();

        assert_eq!(recommendation.fertilizer, "Bone Meal");
        assert!(!recommendation.advice.is_curated());
    }

    #[test]
    fn test_missing_soil_encoder_fails() {
        let config = ArtifactConfig {
            soil_encoder_path: PathBuf::from("/nonexistent/le_soil.json"),
            ..demo_config()
        };

        let err = load_artifacts(&config).unwrap_err();

        match err {
            DomainError::ArtifactLoad { artifact, path, .. } => {
                assert_eq!(artifact, "soil encoder");
                assert_eq!(path, "/nonexistent/le_soil.json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_model_fails() {
        let path = scratch_file(r#"{"n_features": 8, "classes": ["Urea"]}"#);
        let config = ArtifactConfig {
            model_path: path.clone(),
            ..demo_config()
        };

        let err = load_artifacts(&config).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, DomainError::ArtifactLoad { ref artifact, .. } if artifact == "model"));
        assert!(err.to_string().contains("trees"));
    }

    #[test]
    fn test_encoder_with_wrong_shape_fails() {
        let path = scratch_file(r#"{"classes": "Wheat"}"#);
        let config = ArtifactConfig {
            crop_encoder_path: path.clone(),
            ..demo_config()
        };

        let err = load_artifacts(&config).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(err.kind(), "artifact_load");
        assert!(err.to_string().contains("crop encoder"));
    }
}
