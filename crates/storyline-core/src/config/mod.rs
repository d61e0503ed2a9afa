//! Configuration system for Storyline.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod clustering_config;
pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod storyline_config;
pub mod temporal_config;
pub mod timeline_config;

pub use clustering_config::ClusteringConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use storyline_config::{CliOverrides, StorylineConfig};
pub use temporal_config::TemporalConfig;
pub use timeline_config::{DateStyle, TimelineConfig};
