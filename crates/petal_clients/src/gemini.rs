use std::fmt;

use async_trait::async_trait;
use petal_core::{Error, Result, TextModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL_NAME: &str = "gemini-2.5-flash";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

fn explain_prompt(label: &str) -> String {
    format!(
        "Explain the flower '{}' in simple terms and give tips on how to take care of it. \
         Keep it concise (150 words max).",
        label
    )
}

fn answer_prompt(label: &str, question: &str) -> String {
    format!(
        "You are a botanist. Answer this question about the flower '{}': {}. \
         Keep your answer concise and helpful.",
        label, question
    )
}

fn extract_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| Error::Generation(format!("unexpected response: {}", e)))?;
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| Error::Generation("no text in response".to_string()))
}

pub struct GeminiModel {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key =
            api_key.ok_or_else(|| Error::ModelLoad("Gemini API key is required".to_string()))?;
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn generate(&self, prompt: String) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL_NAME, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Generation(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        extract_text(&body)
    }
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &MODEL_NAME)
            .finish()
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn explain(&self, label: &str) -> Result<String> {
        tracing::debug!(%label, "requesting flower explanation");
        self.generate(explain_prompt(label)).await
    }

    async fn answer(&self, label: &str, question: &str) -> Result<String> {
        tracing::debug!(%label, "requesting answer to question");
        self.generate(answer_prompt(label, question)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_prompt_names_flower_and_word_cap() {
        let prompt = explain_prompt("rose");
        assert!(prompt.contains("'rose'"));
        assert!(prompt.contains("150 words max"));
    }

    #[test]
    fn test_answer_prompt_includes_question() {
        let prompt = answer_prompt("tulip", "How often should I water it?");
        assert!(prompt.starts_with("You are a botanist."));
        assert!(prompt.contains("'tulip'"));
        assert!(prompt.contains("How often should I water it?"));
    }

    #[test]
    fn test_extract_text_from_candidates() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Roses like sun."}]}}
            ]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "Roses like sun.");
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let err = extract_text(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[test]
    fn test_extract_text_garbage_is_generation_error() {
        let err = extract_text("not json").unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[test]
    fn test_model_requires_api_key() {
        let result = GeminiModel::new(None);
        assert!(matches!(result, Err(Error::ModelLoad(_))));
        assert!(GeminiModel::new(Some("test-key".to_string())).is_ok());
    }
}
