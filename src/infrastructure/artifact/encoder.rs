//! Label encoder artifact

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::CategoryEncoder;

/// On-disk shape of a label encoder
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelEncoderFile {
    classes: Vec<String>,
}

/// Fitted label encoder: class `i` encodes to `i`
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LabelEncoderFile")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("encoder has no classes".to_string());
        }

        let mut index = HashMap::with_capacity(classes.len());

        for (position, class) in classes.iter().enumerate() {
            if index.insert(class.clone(), position).is_some() {
                return Err(format!("duplicate class '{}'", class));
            }
        }

        Ok(Self { classes, index })
    }
}

impl TryFrom<LabelEncoderFile> for LabelEncoder {
    type Error = String;

    fn try_from(file: LabelEncoderFile) -> Result<Self, Self::Error> {
        Self::new(file.classes)
    }
}

impl CategoryEncoder for LabelEncoder {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn encode(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_classes() {
        let encoder: LabelEncoder =
            serde_json::from_str(r#"{"classes": ["Black", "Red", "Sandy"]}"#).unwrap();

        assert_eq!(encoder.classes(), ["Black", "Red", "Sandy"]);
        assert_eq!(encoder.encode("Black"), Some(0));
        assert_eq!(encoder.encode("Sandy"), Some(2));
    }

    #[test]
    fn test_encode_unknown_class() {
        let encoder = LabelEncoder::new(vec!["Wheat".to_string()]).unwrap();
        assert_eq!(encoder.encode("wheat"), None);
    }

    #[test]
    fn test_empty_classes_rejected() {
        let result = serde_json::from_str::<LabelEncoder>(r#"{"classes": []}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("encoder has no classes"));
    }

    #[test]
    fn test_duplicate_classes_rejected() {
        let result = LabelEncoder::new(vec!["Red".to_string(), "Red".to_string()]);
        assert_eq!(result.unwrap_err(), "duplicate class 'Red'");
    }

    #[test]
    fn test_wrong_shape_rejected() {
        assert!(serde_json::from_str::<LabelEncoder>(r#"["Black", "Red"]"#).is_err());
        assert!(serde_json::from_str::<LabelEncoder>(r#"{"labels": ["Black"]}"#).is_err());
    }
}
