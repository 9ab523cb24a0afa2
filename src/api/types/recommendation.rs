//! Recommendation request/response types for the JSON API

use serde::{Deserialize, Serialize};

use crate::domain::{FormOptions, NumericField, Recommendation, NUMERIC_FIELDS};

/// Response for GET /v1/options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub soil_colors: Vec<String>,
    pub crops: Vec<String>,
    pub bounds: Vec<BoundsResponse>,
}

/// Accepted range of one numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsResponse {
    pub field: String,
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl From<&NumericField> for BoundsResponse {
    fn from(field: &NumericField) -> Self {
        Self {
            field: field.name.to_string(),
            min: field.min,
            max: field.max,
        }
    }
}

impl From<FormOptions> for OptionsResponse {
    fn from(options: FormOptions) -> Self {
        Self {
            soil_colors: options.soil_colors,
            crops: options.crops,
            bounds: NUMERIC_FIELDS.iter().map(BoundsResponse::from).collect(),
        }
    }
}

/// Response for POST /v1/recommendations
///
/// `tip` and `image` are set together for curated fertilizers; `message`
/// carries the generic advice otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub fertilizer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        let advice = recommendation.advice;

        Self {
            fertilizer: recommendation.fertilizer,
            tip: advice.tip().map(str::to_string),
            image: advice.image().map(str::to_string),
            message: advice.fallback_message().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Advice, FALLBACK_MESSAGE};

    #[test]
    fn test_curated_response() {
        let response = RecommendationResponse::from(Recommendation {
            fertilizer: "DAP".to_string(),
            advice: Advice::for_label("DAP"),
        });

        assert_eq!(response.image.as_deref(), Some("images/dap.jpg"));
        assert!(response.tip.is_some());
        assert!(response.message.is_none());

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("message"));
    }

    #[test]
    fn test_fallback_response() {
        let response = RecommendationResponse::from(Recommendation {
            fertilizer: "Bone Meal".to_string(),
            advice: Advice::for_label("Bone Meal"),
        });

        assert_eq!(response.message.as_deref(), Some(FALLBACK_MESSAGE));

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"fertilizer\":\"Bone Meal\""));
        assert!(!json.contains("tip"));
        assert!(!json.contains("image"));
    }

    #[test]
    fn test_options_response_includes_bounds() {
        let response = OptionsResponse::from(FormOptions {
            soil_colors: vec!["Black".to_string()],
            crops: vec!["Wheat".to_string()],
        });

        assert_eq!(response.bounds.len(), NUMERIC_FIELDS.len());

        let ph = response.bounds.iter().find(|b| b.field == "ph").unwrap();
        assert_eq!((ph.min, ph.max), (0.0, Some(14.0)));

        let temperature = response.bounds.iter().find(|b| b.field == "temperature").unwrap();
        assert_eq!((temperature.min, temperature.max), (-10.0, None));
    }
}
