//! Timeline assembly: chronological order, grouped by topic.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use storyline_core::config::DateStyle;
use storyline_core::models::{Entity, Event, Granularity, TopicId};
use tracing::info;

use crate::format::display_date;

/// One event as it appears on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub display_date: String,
    pub sentence: String,
    pub date: NaiveDate,
    pub granularity: Granularity,
    pub raw_date_text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
}

/// All entries sharing a topic, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicGroup {
    pub topic: TopicId,
    pub label: String,
    pub entries: Vec<TimelineEntry>,
}

/// Topic groups in ascending topic order, the unassigned group last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub groups: Vec<TopicGroup>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.entries.is_empty())
    }

    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Number of assigned topics, not counting the catch-all group.
    pub fn topic_count(&self) -> usize {
        self.groups.iter().filter(|g| g.topic.is_assigned()).count()
    }
}

/// Builds a `Timeline` from topic-tagged events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineAssembler {
    date_style: DateStyle,
}

impl TimelineAssembler {
    pub fn new(date_style: DateStyle) -> Self {
        Self { date_style }
    }

    /// Stable-sort by date, then split into one group per topic. Events
    /// sharing a date keep their narrative order.
    pub fn assemble(&self, mut events: Vec<Event>) -> Timeline {
        events.sort_by_key(Event::resolved_date);

        let topics: BTreeSet<TopicId> = events.iter().map(Event::topic_id).collect();
        let groups: Vec<TopicGroup> = topics
            .into_iter()
            .map(|topic| TopicGroup {
                topic,
                label: topic.label(),
                entries: events
                    .iter()
                    .filter(|e| e.topic_id() == topic)
                    .map(|e| self.entry(e))
                    .collect(),
            })
            .collect();

        let timeline = Timeline { groups };
        info!(
            events = timeline.event_count(),
            topics = timeline.topic_count(),
            "timeline assembled"
        );
        timeline
    }

    fn entry(&self, event: &Event) -> TimelineEntry {
        TimelineEntry {
            display_date: display_date(event.resolved_date(), event.granularity(), self.date_style),
            sentence: event.sentence().to_string(),
            date: event.resolved_date(),
            granularity: event.granularity(),
            raw_date_text: event.raw_date_text().to_string(),
            entities: event.entities().to_vec(),
        }
    }
}
