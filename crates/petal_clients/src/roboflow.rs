use std::fmt;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use petal_core::{Classifier, Error, Prediction, Result};
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://classify.roboflow.com";
pub const DEFAULT_PROJECT: &str = "flower-classification-5qfoa";
pub const DEFAULT_VERSION: u32 = 2;

/// The hosted inference API returns two shapes depending on model version:
/// a flat item carrying `class` (or `top`) and `confidence`, or an item
/// nesting its own `predictions` array whose first element carries them.
#[derive(Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    predictions: Vec<RawPrediction>,
}

#[derive(Deserialize)]
struct RawPrediction {
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    top: Option<String>,
    #[serde(default)]
    confidence: Option<f32>,
    #[serde(default)]
    predictions: Option<Vec<InnerPrediction>>,
}

#[derive(Deserialize)]
struct InnerPrediction {
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    confidence: Option<f32>,
}

impl RawPrediction {
    fn flatten(self) -> Prediction {
        if let Some(inner) = self.predictions.and_then(|mut p| {
            if p.is_empty() {
                None
            } else {
                Some(p.remove(0))
            }
        }) {
            return Prediction::new(
                inner.class.unwrap_or_else(|| "Unknown".to_string()),
                inner.confidence.unwrap_or(0.0),
            );
        }
        Prediction::new(
            self.top
                .or(self.class)
                .unwrap_or_else(|| "Unknown".to_string()),
            self.confidence.unwrap_or(0.0),
        )
    }
}

fn parse_response(body: &str) -> Result<Vec<Prediction>> {
    let response: ClassifyResponse = serde_json::from_str(body)
        .map_err(|e| Error::Classification(format!("unexpected response: {}", e)))?;
    Ok(response
        .predictions
        .into_iter()
        .map(RawPrediction::flatten)
        .collect())
}

pub struct RoboflowClassifier {
    client: Client,
    api_key: String,
    project: String,
    version: u32,
    base_url: String,
}

impl RoboflowClassifier {
    pub fn new(api_key: Option<String>, project: &str, version: u32) -> Result<Self> {
        let api_key =
            api_key.ok_or_else(|| Error::ModelLoad("Roboflow API key is required".to_string()))?;
        Ok(Self {
            client: Client::new(),
            api_key,
            project: project.to_string(),
            version,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for RoboflowClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoboflowClassifier")
            .field("api_key", &"<redacted>")
            .field("project", &self.project)
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Classifier for RoboflowClassifier {
    fn name(&self) -> &str {
        "Roboflow"
    }

    async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>> {
        let url = format!(
            "{}/{}/{}?api_key={}",
            self.base_url, self.project, self.version, self.api_key
        );

        tracing::debug!(project = %self.project, version = self.version, "classifying image");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(general_purpose::STANDARD.encode(image))
            .send()
            .await
            .map_err(|e| Error::Classification(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Classification(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Classification(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let predictions = parse_response(&body)?;
        tracing::debug!(count = predictions.len(), "received predictions");
        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_class_shape() {
        let body = r#"{"predictions":[{"class":"rose","confidence":0.97}]}"#;
        let predictions = parse_response(body).unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].label, "rose");
        assert!((predictions[0].confidence - 0.97).abs() < 1e-6);
    }

    #[test]
    fn test_parse_flat_top_shape() {
        let body = r#"{"predictions":[{"top":"tulip","confidence":0.81}]}"#;
        let predictions = parse_response(body).unwrap();
        assert_eq!(predictions[0].label, "tulip");
        assert!((predictions[0].confidence - 0.81).abs() < 1e-6);
    }

    #[test]
    fn test_parse_nested_shape() {
        let body = r#"{"predictions":[{"predictions":[{"class":"daisy","confidence":0.88}]}]}"#;
        let predictions = parse_response(body).unwrap();
        assert_eq!(predictions[0].label, "daisy");
        assert!((predictions[0].confidence - 0.88).abs() < 1e-6);
    }

    #[test]
    fn test_flat_and_nested_shapes_agree() {
        let flat = parse_response(r#"{"predictions":[{"class":"lily","confidence":0.5}]}"#)
            .unwrap()
            .remove(0);
        let nested =
            parse_response(r#"{"predictions":[{"predictions":[{"class":"lily","confidence":0.5}]}]}"#)
                .unwrap()
                .remove(0);
        assert_eq!(flat.label, nested.label);
        assert_eq!(flat.confidence, nested.confidence);
    }

    #[test]
    fn test_parse_empty_predictions() {
        let predictions = parse_response(r#"{"predictions":[]}"#).unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_parse_missing_fields_fall_back() {
        let predictions = parse_response(r#"{"predictions":[{}]}"#).unwrap();
        assert_eq!(predictions[0].label, "Unknown");
        assert_eq!(predictions[0].confidence, 0.0);
    }

    #[test]
    fn test_parse_empty_inner_predictions_uses_outer_fields() {
        let body = r#"{"predictions":[{"class":"rose","confidence":0.6,"predictions":[]}]}"#;
        let predictions = parse_response(body).unwrap();
        assert_eq!(predictions[0].label, "rose");
        assert!((predictions[0].confidence - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_parse_garbage_is_classification_error() {
        let err = parse_response("not json").unwrap_err();
        assert!(matches!(err, Error::Classification(_)));
    }

    #[test]
    fn test_classifier_requires_api_key() {
        let result = RoboflowClassifier::new(None, DEFAULT_PROJECT, DEFAULT_VERSION);
        assert!(matches!(result, Err(Error::ModelLoad(_))));

        let result = RoboflowClassifier::new(
            Some("test-key".to_string()),
            DEFAULT_PROJECT,
            DEFAULT_VERSION,
        );
        assert!(result.is_ok());
    }
}
