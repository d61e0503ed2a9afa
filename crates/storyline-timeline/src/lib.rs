//! # storyline-timeline
//!
//! Sorts topic-tagged events into a `Timeline` of topic groups and renders
//! it as a plain-text storyline or a TimelineJS document.

pub mod assembler;
pub mod format;
pub mod render;

pub use assembler::{Timeline, TimelineAssembler, TimelineEntry, TopicGroup};
pub use format::display_date;
pub use render::{render_text, render_timeline_js, TextOptions, TimelineJsDocument};
