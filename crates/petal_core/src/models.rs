use async_trait::async_trait;

use crate::types::Prediction;
use crate::Result;

/// A remote image-classification service. One network call per image,
/// no retries, no batching.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Human-readable name of the backing service.
    fn name(&self) -> &str;

    /// Classify one image and return its ranked predictions. An empty
    /// vector means the service found no match.
    async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>>;
}

/// A remote text-generation service. Every call is independent; no
/// conversation history is kept between calls.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Human-readable name of the backing service.
    fn name(&self) -> &str;

    /// Describe the given flower in a short passage.
    async fn explain(&self, label: &str) -> Result<String>;

    /// Answer a free-text question about the given flower.
    async fn answer(&self, label: &str, question: &str) -> Result<String>;
}
