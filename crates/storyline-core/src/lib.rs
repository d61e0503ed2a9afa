//! # storyline-core
//!
//! Foundation crate for the Storyline timeline extractor.
//! Defines the event model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StorylineConfig;
pub use errors::{StorylineError, StorylineResult};
pub use models::{
    AnnotatedSentence, DateOrder, DateSettings, Entity, EntityLabel, EntitySpan, Event,
    Granularity, SubDate, TopicId,
};
