use crate::errors::StorylineResult;
use crate::models::AnnotatedSentence;

/// Sentence segmentation and entity recognition.
pub trait IAnnotator: Send + Sync {
    /// Split `text` into sentences, each carrying its labelled entity spans.
    fn annotate(&self, text: &str) -> StorylineResult<Vec<AnnotatedSentence>>;

    /// Human-readable annotator name.
    fn name(&self) -> &str;
}
