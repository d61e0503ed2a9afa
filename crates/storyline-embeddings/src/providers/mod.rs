//! Provider registry.
//!
//! `tfidf` needs nothing and is the default; `onnx` needs a model file and
//! its `tokenizer.json`.
//! A provider that cannot be built is an error, never a silent downgrade.

pub mod onnx_provider;
pub mod tfidf_fallback;

pub use onnx_provider::OnnxProvider;
pub use tfidf_fallback::TfIdfFallback;

use storyline_core::config::EmbeddingConfig;
use storyline_core::errors::{EmbeddingError, StorylineResult};
use storyline_core::traits::IEmbeddingProvider;
use tracing::info;

/// Create the configured provider, returning it boxed.
///
/// # Errors
/// `ProviderUnavailable` when `onnx` lacks `model_path` or `tokenizer_path`,
/// `ModelLoadFailed` when either file cannot be loaded, `UnknownProvider` for any other name.
pub fn create_provider(config: &EmbeddingConfig) -> StorylineResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "tfidf" => {
            info!(provider = "tfidf", dims = config.dimensions, "embedding provider ready");
            Ok(Box::new(TfIdfFallback::new(config.dimensions)))
        }
        "onnx" => {
            let unavailable = |missing: &str| EmbeddingError::ProviderUnavailable {
                provider: format!("onnx (no {missing} configured)"),
            };
            let model_path = config
                .model_path
                .as_deref()
                .ok_or_else(|| unavailable("model_path"))?;
            let tokenizer_path = config
                .tokenizer_path
                .as_deref()
                .ok_or_else(|| unavailable("tokenizer_path"))?;
            let provider = OnnxProvider::load(
                model_path,
                tokenizer_path,
                config.dimensions,
                config.batch_size,
            )?;
            info!(provider = "onnx", model = provider.name(), "embedding provider loaded");
            Ok(Box::new(provider))
        }
        other => Err(EmbeddingError::UnknownProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}
