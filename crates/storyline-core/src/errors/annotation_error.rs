/// Sentence segmentation and entity tagging errors.
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("annotator initialization failed: {reason}")]
    InitFailed { reason: String },
}
