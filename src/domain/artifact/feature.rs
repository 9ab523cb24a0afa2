use serde::Serialize;

/// Number of features the classifier was trained on
pub const FEATURE_COUNT: usize = 8;

/// Column order of the training data. Must match the offline pipeline exactly.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "soil_color",
    "nitrogen",
    "phosphorus",
    "potassium",
    "ph",
    "rainfall",
    "temperature",
    "crop",
];

/// One row of model input in training column order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_names_bracket_numeric_fields() {
        assert_eq!(FEATURE_NAMES[0], "soil_color");
        assert_eq!(FEATURE_NAMES[FEATURE_COUNT - 1], "crop");
    }

    #[test]
    fn test_feature_vector_access() {
        let vector = FeatureVector::new([0.0, 80.0, 40.0, 40.0, 6.5, 200.0, 25.0, 4.0]);

        assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
        assert_eq!(vector.get(4), Some(6.5));
        assert_eq!(vector.get(FEATURE_COUNT), None);
    }

    #[test]
    fn test_feature_vector_serializes_as_array() {
        let vector = FeatureVector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0,5.0,6.0,7.0,8.0]");
    }
}
