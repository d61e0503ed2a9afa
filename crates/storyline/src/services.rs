//! Collaborator wiring.

use storyline_clustering::HdbscanClusterer;
use storyline_core::config::{DateStyle, StorylineConfig};
use storyline_core::errors::StorylineResult;
use storyline_core::models::DateSettings;
use storyline_core::traits::{IAnnotator, IClusterer, IDateParser, IEmbeddingProvider};
use storyline_embeddings::create_provider;
use storyline_nlp::RuleAnnotator;
use storyline_temporal::RuleDateParser;
use tracing::info;

use crate::pipeline::StorylinePipeline;

/// Owns every collaborator a pipeline run needs.
///
/// Built once per process; construction failures (bad regex tables, a
/// missing model file, invalid clustering parameters) surface here rather
/// than halfway through a run.
pub struct Services {
    pub annotator: Box<dyn IAnnotator>,
    pub date_parser: Box<dyn IDateParser>,
    pub embedder: Box<dyn IEmbeddingProvider>,
    pub clusterer: Box<dyn IClusterer>,
    pub date_settings: DateSettings,
    pub date_style: DateStyle,
}

impl Services {
    /// Build the default collaborators from a config.
    ///
    /// The config is validated first, so a config built in code or with
    /// `StorylineConfig::from_toml` gets the same checks as one from `load`.
    pub fn from_config(config: &StorylineConfig) -> StorylineResult<Self> {
        config.validate()?;

        let annotator = RuleAnnotator::new()?;
        let date_parser = RuleDateParser::new()?;
        let embedder = create_provider(&config.embedding)?;
        let clusterer = HdbscanClusterer::new(config.clustering.clone())?;

        info!(
            version = storyline_core::constants::VERSION,
            annotator = annotator.name(),
            embedder = embedder.name(),
            clusterer = clusterer.name(),
            date_order = %config.temporal.date_order,
            "services initialized"
        );

        Ok(Self {
            annotator: Box::new(annotator),
            date_parser: Box::new(date_parser),
            embedder,
            clusterer: Box::new(clusterer),
            date_settings: config.temporal.settings(),
            date_style: config.timeline.date_style,
        })
    }

    /// Replace the embedding provider.
    pub fn with_embedder(mut self, embedder: Box<dyn IEmbeddingProvider>) -> Self {
        self.embedder = embedder;
        self
    }

    /// Replace the clusterer.
    pub fn with_clusterer(mut self, clusterer: Box<dyn IClusterer>) -> Self {
        self.clusterer = clusterer;
        self
    }

    /// A pipeline borrowing these collaborators.
    pub fn pipeline(&self) -> StorylinePipeline<'_> {
        StorylinePipeline::new(
            self.annotator.as_ref(),
            self.date_parser.as_ref(),
            self.embedder.as_ref(),
            self.clusterer.as_ref(),
            self.date_settings,
            self.date_style,
        )
    }
}
