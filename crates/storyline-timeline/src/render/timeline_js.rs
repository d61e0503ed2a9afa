//! TimelineJS document output.
//!
//! `start_date` carries only the components the granularity vouches for, so
//! a year-precision event is not pinned to January 1st on the slide.

use chrono::Datelike;
use serde::Serialize;
use storyline_core::errors::StorylineResult;

use crate::assembler::{Timeline, TimelineEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineJsDocument {
    pub events: Vec<TimelineJsEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineJsEvent {
    pub text: TimelineJsText,
    pub display_date: String,
    pub start_date: TimelineJsDate,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineJsText {
    pub headline: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineJsDate {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl TimelineJsDate {
    fn from_entry(entry: &TimelineEntry) -> Self {
        let date = entry.date;
        let granularity = entry.granularity;
        Self {
            year: date.year(),
            month: granularity.has_month().then(|| date.month()),
            day: granularity.has_day().then(|| date.day()),
        }
    }
}

/// Flatten the timeline into chronologically ordered slides, each tagged
/// with its topic label as the TimelineJS group.
pub fn to_timeline_js(timeline: &Timeline) -> TimelineJsDocument {
    let mut events: Vec<(&TimelineEntry, &str)> = timeline
        .groups
        .iter()
        .flat_map(|g| g.entries.iter().map(move |e| (e, g.label.as_str())))
        .collect();
    events.sort_by_key(|(e, _)| e.date);

    TimelineJsDocument {
        events: events
            .into_iter()
            .map(|(entry, group)| TimelineJsEvent {
                text: TimelineJsText {
                    headline: entry.display_date.clone(),
                    text: entry.sentence.clone(),
                },
                display_date: entry.display_date.clone(),
                start_date: TimelineJsDate::from_entry(entry),
                group: group.to_string(),
            })
            .collect(),
    }
}

/// Pretty-printed TimelineJS JSON.
pub fn render_timeline_js(timeline: &Timeline) -> StorylineResult<String> {
    Ok(serde_json::to_string_pretty(&to_timeline_js(timeline))?)
}
