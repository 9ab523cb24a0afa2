//! Curated usage tips and images for known fertilizers

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Shown for any fertilizer without a curated tip and image
pub const FALLBACK_MESSAGE: &str =
    "✅ Apply fertilizer as per recommended dose and monitor soil health regularly.";

static TIPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Urea",
            "✔️ Urea is rich in nitrogen. Use it for leafy crops. Avoid overuse to prevent soil acidity.",
        ),
        (
            "DAP",
            "✔️ DAP provides nitrogen and phosphorus. Best during early plant growth stages.",
        ),
        (
            "MOP",
            "✔️ MOP supplies potassium. Ideal for fruiting and flowering crops.",
        ),
        (
            "NPK 20:20:20",
            "✔️ Balanced fertilizer. Perfect for vegetables and cereals.",
        ),
        (
            "Compost",
            "✔️ Organic fertilizer improving soil structure and microbial activity.",
        ),
    ])
});

static IMAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Urea", "images/urea.jpg"),
        ("DAP", "images/dap.jpg"),
        ("MOP", "images/mop.jpg"),
        ("NPK 20:20:20", "images/npk.jpg"),
        ("Compost", "images/compost.jpg"),
    ])
});

/// Usage tip for a fertilizer label
pub fn tip_for(label: &str) -> Option<&'static str> {
    TIPS.get(label).copied()
}

/// Relative image path for a fertilizer label
pub fn image_for(label: &str) -> Option<&'static str> {
    IMAGES.get(label).copied()
}

/// Labels that carry both a tip and an image
pub fn curated_labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = TIPS
        .keys()
        .copied()
        .filter(|label| IMAGES.contains_key(label))
        .collect();
    labels.sort_unstable();
    labels
}

/// What to show next to a recommended fertilizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advice {
    Curated {
        tip: &'static str,
        image: &'static str,
    },
    Fallback {
        message: &'static str,
    },
}

impl Advice {
    /// Curated advice when both tables know the label, the generic message otherwise
    pub fn for_label(label: &str) -> Self {
        match (tip_for(label), image_for(label)) {
            (Some(tip), Some(image)) => Self::Curated { tip, image },
            _ => Self::Fallback {
                message: FALLBACK_MESSAGE,
            },
        }
    }

    pub fn is_curated(&self) -> bool {
        matches!(self, Self::Curated { .. })
    }

    pub fn tip(&self) -> Option<&'static str> {
        match self {
            Self::Curated { tip, .. } => Some(*tip),
            Self::Fallback { .. } => None,
        }
    }

    pub fn image(&self) -> Option<&'static str> {
        match self {
            Self::Curated { image, .. } => Some(*image),
            Self::Fallback { .. } => None,
        }
    }

    pub fn fallback_message(&self) -> Option<&'static str> {
        match self {
            Self::Curated { .. } => None,
            Self::Fallback { message } => Some(*message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURATED: [&str; 5] = ["Urea", "DAP", "MOP", "NPK 20:20:20", "Compost"];

    #[test]
    fn test_every_curated_label_has_tip_and_image() {
        for label in CURATED {
            assert!(tip_for(label).is_some(), "missing tip for {}", label);
            assert!(image_for(label).is_some(), "missing image for {}", label);
        }
    }

    #[test]
    fn test_tables_share_keys() {
        assert_eq!(TIPS.len(), IMAGES.len());
        assert_eq!(curated_labels().len(), CURATED.len());
    }

    #[test]
    fn test_urea_advice() {
        let advice = Advice::for_label("Urea");

        assert!(advice.is_curated());
        assert_eq!(
            advice.tip(),
            Some("✔️ Urea is rich in nitrogen. Use it for leafy crops. Avoid overuse to prevent soil acidity.")
        );
        assert_eq!(advice.image(), Some("images/urea.jpg"));
        assert_eq!(advice.fallback_message(), None);
    }

    #[test]
    fn test_uncurated_label_falls_back() {
        let advice = Advice::for_label("Bone Meal");

        assert!(!advice.is_curated());
        assert_eq!(advice.fallback_message(), Some(FALLBACK_MESSAGE));
        assert_eq!(advice.tip(), None);
        assert_eq!(advice.image(), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Advice::for_label("urea").fallback_message(), Some(FALLBACK_MESSAGE));
    }

    #[test]
    fn test_advice_serialization() {
        let json = serde_json::to_string(&Advice::for_label("MOP")).unwrap();
        assert!(json.contains("\"kind\":\"curated\""));
        assert!(json.contains("images/mop.jpg"));

        let json = serde_json::to_string(&Advice::for_label("Gypsum")).unwrap();
        assert!(json.contains("\"kind\":\"fallback\""));
    }
}
