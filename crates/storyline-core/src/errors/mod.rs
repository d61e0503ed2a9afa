//! Error handling for Storyline.
//! One error enum per subsystem, `thiserror` only, aggregated into `StorylineError`.

pub mod annotation_error;
pub mod clustering_error;
pub mod config_error;
pub mod embedding_error;
pub mod temporal_error;

pub use annotation_error::AnnotationError;
pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use temporal_error::TemporalError;

/// Top-level error for every fallible Storyline operation.
#[derive(Debug, thiserror::Error)]
pub enum StorylineError {
    #[error("annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("date parser error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for StorylineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            reason: e.to_string(),
        }
    }
}

pub type StorylineResult<T> = Result<T, StorylineError>;
