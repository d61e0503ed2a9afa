use crate::errors::StorylineResult;
use crate::models::TopicId;

/// Density-based grouping of vectors into topics.
pub trait IClusterer: Send + Sync {
    /// Assign one topic per vector, same order and count as the input.
    fn cluster(&self, vectors: &[Vec<f32>]) -> StorylineResult<Vec<TopicId>>;

    /// Human-readable clusterer name.
    fn name(&self) -> &str;
}
