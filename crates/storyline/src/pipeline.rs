//! End-to-end storyline reconstruction.

use storyline_clustering::TopicClusterer;
use storyline_core::config::DateStyle;
use storyline_core::errors::StorylineResult;
use storyline_core::models::{DateSettings, Event};
use storyline_core::traits::{IAnnotator, IClusterer, IDateParser, IEmbeddingProvider};
use storyline_temporal::DateCandidateResolver;
use storyline_timeline::{Timeline, TimelineAssembler};
use tracing::info;

/// One pass from raw text to a grouped timeline.
///
/// Stages run in order: annotate, resolve dates, assign topics, assemble.
/// Sentences without a usable date never reach clustering.
pub struct StorylinePipeline<'a> {
    annotator: &'a dyn IAnnotator,
    resolver: DateCandidateResolver<'a>,
    topics: TopicClusterer<'a>,
    assembler: TimelineAssembler,
}

impl<'a> StorylinePipeline<'a> {
    pub fn new(
        annotator: &'a dyn IAnnotator,
        date_parser: &'a dyn IDateParser,
        embedder: &'a dyn IEmbeddingProvider,
        clusterer: &'a dyn IClusterer,
        settings: DateSettings,
        date_style: DateStyle,
    ) -> Self {
        Self {
            annotator,
            resolver: DateCandidateResolver::new(date_parser, settings),
            topics: TopicClusterer::new(embedder, clusterer),
            assembler: TimelineAssembler::new(date_style),
        }
    }

    /// Dated events in sentence order, without topics.
    pub fn extract_events(&self, text: &str) -> StorylineResult<Vec<Event>> {
        let sentences = self.annotator.annotate(text)?;
        let events = self.resolver.resolve_all(&sentences);
        info!(
            sentences = sentences.len(),
            events = events.len(),
            "event extraction complete"
        );
        Ok(events)
    }

    /// Tag each event with a topic. Order and every other field are kept.
    pub fn assign_topics(&self, mut events: Vec<Event>) -> StorylineResult<Vec<Event>> {
        self.topics.assign_topics(&mut events)?;
        Ok(events)
    }

    pub fn assemble(&self, events: Vec<Event>) -> Timeline {
        self.assembler.assemble(events)
    }

    /// Run every stage.
    pub fn run(&self, text: &str) -> StorylineResult<Timeline> {
        self.run_events(text).map(|(timeline, _)| timeline)
    }

    /// Run every stage, also returning the topic-tagged events in sentence
    /// order.
    pub fn run_events(&self, text: &str) -> StorylineResult<(Timeline, Vec<Event>)> {
        let events = self.assign_topics(self.extract_events(text)?)?;
        let timeline = self.assemble(events.clone());
        info!(
            events = timeline.event_count(),
            topics = timeline.topic_count(),
            "storyline assembled"
        );
        Ok((timeline, events))
    }
}
