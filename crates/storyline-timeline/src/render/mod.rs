//! Timeline renderers.

pub mod text;
pub mod timeline_js;

pub use text::{render_text, TextOptions};
pub use timeline_js::{
    render_timeline_js, to_timeline_js, TimelineJsDate, TimelineJsDocument, TimelineJsEvent,
    TimelineJsText,
};
