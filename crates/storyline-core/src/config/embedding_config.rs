use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "tfidf" or "onnx".
    pub provider: String,
    /// Path to the ONNX model file. Required for the "onnx" provider.
    pub model_path: Option<String>,
    /// Path to the model's `tokenizer.json`. Required for the "onnx" provider.
    pub tokenizer_path: Option<String>,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Number of sentences sent to the provider per call.
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_path: None,
            tokenizer_path: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }
}
