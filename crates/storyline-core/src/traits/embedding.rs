use crate::errors::StorylineResult;

/// Maps sentences to fixed-length vectors for topic clustering.
///
/// Every vector a provider returns has exactly `dimensions()` components.
pub trait IEmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> StorylineResult<Vec<f32>>;

    /// Embed a batch. Output order and count match the input.
    fn embed_batch(&self, texts: &[String]) -> StorylineResult<Vec<Vec<f32>>>;

    fn dimensions(&self) -> usize;

    /// Provider name for logs.
    fn name(&self) -> &str;
}
