//! Topic assignment over a full event list.

use std::collections::BTreeSet;

use storyline_core::errors::{ClusteringError, EmbeddingError, StorylineResult};
use storyline_core::models::{Event, TopicId};
use storyline_core::traits::{IClusterer, IEmbeddingProvider};
use tracing::{debug, info};

use crate::normalize::normalize_rows;

/// Embeds event sentences and clusters them into topics.
pub struct TopicClusterer<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    clusterer: &'a dyn IClusterer,
}

impl<'a> TopicClusterer<'a> {
    pub fn new(embedder: &'a dyn IEmbeddingProvider, clusterer: &'a dyn IClusterer) -> Self {
        Self {
            embedder,
            clusterer,
        }
    }

    /// Give every event a topic. Only `topic_id` is touched.
    ///
    /// # Errors
    /// Embedder or clusterer failures, a vector count or label count that
    /// differs from the event count, and vectors of inconsistent dimension.
    pub fn assign_topics(&self, events: &mut [Event]) -> StorylineResult<()> {
        if events.is_empty() {
            debug!("no events, clustering skipped");
            return Ok(());
        }

        let sentences: Vec<String> = events.iter().map(|e| e.sentence().to_string()).collect();
        let vectors = self.embedder.embed_batch(&sentences)?;
        if vectors.len() != events.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: events.len(),
                actual: vectors.len(),
            }
            .into());
        }

        let dims = self.embedder.dimensions();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dims) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dims,
                actual: bad.len(),
            }
            .into());
        }

        let topics = self.clusterer.cluster(&normalize_rows(vectors))?;
        if topics.len() != events.len() {
            return Err(ClusteringError::CountMismatch {
                expected: events.len(),
                actual: topics.len(),
            }
            .into());
        }

        for (event, topic) in events.iter_mut().zip(topics) {
            event.assign_topic(topic);
        }

        let distinct: BTreeSet<TopicId> = events
            .iter()
            .map(Event::topic_id)
            .filter(TopicId::is_assigned)
            .collect();
        info!(
            events = events.len(),
            topics = distinct.len(),
            unassigned = events.iter().filter(|e| !e.topic_id().is_assigned()).count(),
            embedder = self.embedder.name(),
            clusterer = self.clusterer.name(),
            "topics assigned"
        );
        Ok(())
    }
}
