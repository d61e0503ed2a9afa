//! # storyline
//!
//! Reconstructs topic storylines from narrative text.
//!
//! ```text
//! text ─► IAnnotator ─► DateCandidateResolver ─► TopicClusterer ─► TimelineAssembler
//!          sentences       Vec<Event>              topic ids          Timeline
//! ```
//!
//! `Services` owns the collaborators; `StorylinePipeline` borrows them.

pub mod observability;
pub mod pipeline;
pub mod services;

pub use pipeline::StorylinePipeline;
pub use services::Services;
pub use storyline_timeline::Timeline;
