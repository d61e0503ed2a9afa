//! # storyline-temporal
//!
//! Turns annotated sentences into dated events: candidate scoring, a
//! rule-based `IDateParser`, and the per-sentence `DateCandidateResolver`.

pub mod parser;
pub mod resolver;
pub mod scoring;

pub use parser::RuleDateParser;
pub use resolver::DateCandidateResolver;
pub use scoring::{date_score, has_digit, pick_richest, DateScore};
