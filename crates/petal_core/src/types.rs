use serde::{Deserialize, Serialize};

/// One ranked classification result. Confidence is the model's
/// probability-like score in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Confidence rendered as a percentage with exactly two decimal places.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_percent_two_decimals() {
        assert_eq!(Prediction::new("rose", 0.97).confidence_percent(), "97.00%");
        assert_eq!(Prediction::new("tulip", 0.0).confidence_percent(), "0.00%");
        assert_eq!(Prediction::new("daisy", 1.0).confidence_percent(), "100.00%");
        assert_eq!(
            Prediction::new("lily", 0.12345).confidence_percent(),
            "12.35%"
        );
    }
}
