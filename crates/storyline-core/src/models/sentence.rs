use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityLabel, EntitySpan};

/// One sentence as returned by the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// Trimmed sentence text.
    pub text: String,
    /// Byte offset of `text` in the annotated document.
    pub start: usize,
    /// Byte offset one past the end of `text` in the annotated document.
    pub end: usize,
    /// Entity spans in order of appearance.
    pub entities: Vec<EntitySpan>,
}

impl AnnotatedSentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, entities: Vec<EntitySpan>) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            entities,
        }
    }

    /// Text of every `DATE` span, in order.
    pub fn date_texts(&self) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .filter(|e| e.label == EntityLabel::Date)
            .map(|e| e.text.as_str())
    }

    /// All entities as `(text, label)` pairs, in order.
    pub fn entity_pairs(&self) -> Vec<Entity> {
        self.entities.iter().map(EntitySpan::to_entity).collect()
    }
}
