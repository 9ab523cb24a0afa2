//! Form input and numeric bounds

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;

/// Bounds of one numeric form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericField {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub step: f64,
}

/// Numeric fields in form order. Each starts at its lower bound.
pub const NUMERIC_FIELDS: [NumericField; 6] = [
    NumericField {
        name: "nitrogen",
        label: "Nitrogen (ppm)",
        min: 0.0,
        max: None,
        step: 1.0,
    },
    NumericField {
        name: "phosphorus",
        label: "Phosphorus (ppm)",
        min: 0.0,
        max: None,
        step: 1.0,
    },
    NumericField {
        name: "potassium",
        label: "Potassium (ppm)",
        min: 0.0,
        max: None,
        step: 1.0,
    },
    NumericField {
        name: "ph",
        label: "Soil pH",
        min: 0.0,
        max: Some(14.0),
        step: 0.01,
    },
    NumericField {
        name: "rainfall",
        label: "Rainfall (mm)",
        min: 0.0,
        max: None,
        step: 0.01,
    },
    NumericField {
        name: "temperature",
        label: "Temperature (°C)",
        min: -10.0,
        max: None,
        step: 0.01,
    },
];

/// One complete form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecommendationInput {
    pub soil_color: String,
    #[validate(range(min = 0.0, message = "Nitrogen must be at least 0 ppm"))]
    pub nitrogen: f64,
    #[validate(range(min = 0.0, message = "Phosphorus must be at least 0 ppm"))]
    pub phosphorus: f64,
    #[validate(range(min = 0.0, message = "Potassium must be at least 0 ppm"))]
    pub potassium: f64,
    #[validate(range(min = 0.0, max = 14.0, message = "Soil pH must be between 0 and 14"))]
    pub ph: f64,
    #[validate(range(min = 0.0, message = "Rainfall must be at least 0 mm"))]
    pub rainfall: f64,
    #[validate(range(min = -10.0, message = "Temperature must be at least -10 °C"))]
    pub temperature: f64,
    pub crop: String,
}

impl RecommendationInput {
    /// Initial form state: numeric fields at their lower bounds
    pub fn with_defaults(soil_color: impl Into<String>, crop: impl Into<String>) -> Self {
        Self {
            soil_color: soil_color.into(),
            nitrogen: NUMERIC_FIELDS[0].min,
            phosphorus: NUMERIC_FIELDS[1].min,
            potassium: NUMERIC_FIELDS[2].min,
            ph: NUMERIC_FIELDS[3].min,
            rainfall: NUMERIC_FIELDS[4].min,
            temperature: NUMERIC_FIELDS[5].min,
            crop: crop.into(),
        }
    }

    /// Numeric values in form order, paired with their field names
    pub fn numeric_values(&self) -> [(&'static str, f64); 6] {
        [
            (NUMERIC_FIELDS[0].name, self.nitrogen),
            (NUMERIC_FIELDS[1].name, self.phosphorus),
            (NUMERIC_FIELDS[2].name, self.potassium),
            (NUMERIC_FIELDS[3].name, self.ph),
            (NUMERIC_FIELDS[4].name, self.rainfall),
            (NUMERIC_FIELDS[5].name, self.temperature),
        ]
    }

    /// Numeric field by its form name
    pub fn numeric_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "nitrogen" => Some(&mut self.nitrogen),
            "phosphorus" => Some(&mut self.phosphorus),
            "potassium" => Some(&mut self.potassium),
            "ph" => Some(&mut self.ph),
            "rainfall" => Some(&mut self.rainfall),
            "temperature" => Some(&mut self.temperature),
            _ => None,
        }
    }

    /// Every bound violation, sorted for stable display
    pub fn violations(&self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .numeric_values()
            .iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| format!("{} must be a finite number", name))
            .collect();

        if let Err(errors) = self.validate() {
            for (field, field_errors) in errors.field_errors() {
                for error in field_errors.iter() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is out of range", field));
                    messages.push(message);
                }
            }
        }

        messages.sort();
        messages
    }

    /// Rejects the submission when any numeric field is out of bounds
    pub fn check_bounds(&self) -> Result<(), DomainError> {
        let violations = self.violations();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(violations.join("; ")))
        }
    }
}
