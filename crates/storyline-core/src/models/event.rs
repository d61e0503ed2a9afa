use chrono::NaiveDate;
use serde::Serialize;

use super::entity::Entity;
use super::granularity::Granularity;
use super::topic::TopicId;

/// One dated fact extracted from one sentence.
///
/// Only the topic changes after construction; everything else is read through
/// accessors. Granularity is derived from the resolved date at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    sentence: String,
    raw_date_text: String,
    resolved_date: NaiveDate,
    granularity: Granularity,
    entities: Vec<Entity>,
    topic_id: TopicId,
}

impl Event {
    pub fn new(
        sentence: impl Into<String>,
        raw_date_text: impl Into<String>,
        resolved_date: NaiveDate,
        entities: Vec<Entity>,
    ) -> Self {
        Self {
            sentence: sentence.into(),
            raw_date_text: raw_date_text.into(),
            resolved_date,
            granularity: Granularity::classify(resolved_date),
            entities,
            topic_id: TopicId::Unassigned,
        }
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn raw_date_text(&self) -> &str {
        &self.raw_date_text
    }

    pub fn resolved_date(&self) -> NaiveDate {
        self.resolved_date
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    /// Record the topic chosen by the clusterer.
    pub fn assign_topic(&mut self, topic: TopicId) {
        self.topic_id = topic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_unassigned() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 1).unwrap();
        let event = Event::new("By June 2000, they launched.", "June 2000", date, vec![]);
        assert_eq!(event.topic_id(), TopicId::Unassigned);
        assert_eq!(event.granularity(), Granularity::Month);
    }

    #[test]
    fn assign_topic_only_touches_topic() {
        let date = NaiveDate::from_ymd_opt(2010, 8, 15).unwrap();
        let mut event = Event::new("Upgrade on August 15, 2010.", "August 15, 2010", date, vec![]);
        event.assign_topic(TopicId::Assigned(4));
        assert_eq!(event.topic_id(), TopicId::Assigned(4));
        assert_eq!(event.resolved_date(), date);
        assert_eq!(event.raw_date_text(), "August 15, 2010");
    }
}
