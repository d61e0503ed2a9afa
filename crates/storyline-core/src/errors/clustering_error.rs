/// Topic clustering errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("clustering failed: {reason}")]
    ClusteringFailed { reason: String },

    #[error("clusterer returned {actual} labels for {expected} vectors")]
    CountMismatch { expected: usize, actual: usize },

    #[error("invalid clustering parameter {field}: {message}")]
    InvalidParameters { field: String, message: String },
}
