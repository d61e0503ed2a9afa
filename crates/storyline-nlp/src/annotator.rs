//! `IAnnotator` implementation over the sentence splitter and entity tagger.

use storyline_core::errors::StorylineResult;
use storyline_core::models::AnnotatedSentence;
use storyline_core::traits::IAnnotator;
use tracing::debug;

use crate::entity_tagger::EntityTagger;
use crate::sentence_splitter::split_sentence_spans;

/// Rule-based annotator. Construct once and share; it holds compiled patterns.
pub struct RuleAnnotator {
    tagger: EntityTagger,
}

impl RuleAnnotator {
    /// # Errors
    /// Fails if the entity patterns cannot be compiled.
    pub fn new() -> StorylineResult<Self> {
        Ok(Self {
            tagger: EntityTagger::new()?,
        })
    }
}

impl IAnnotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> StorylineResult<Vec<AnnotatedSentence>> {
        let sentences: Vec<AnnotatedSentence> = split_sentence_spans(text)
            .into_iter()
            .map(|(start, end)| {
                let sentence = &text[start..end];
                AnnotatedSentence::new(sentence, start, end, self.tagger.tag(sentence))
            })
            .collect();

        debug!(
            sentences = sentences.len(),
            entities = sentences.iter().map(|s| s.entities.len()).sum::<usize>(),
            "text annotated"
        );
        Ok(sentences)
    }

    fn name(&self) -> &str {
        "rule-annotator"
    }
}
