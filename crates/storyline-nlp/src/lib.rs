//! # storyline-nlp
//!
//! Default annotator: sentence segmentation with byte spans, then rule-based
//! entity tagging (`DATE`, `ORDINAL`, `MONEY`, `PERCENT`, `CARDINAL`).

pub mod annotator;
pub mod entity_tagger;
pub mod sentence_splitter;

pub use annotator::RuleAnnotator;
pub use entity_tagger::EntityTagger;
pub use sentence_splitter::{split_sentence_spans, split_sentences};
