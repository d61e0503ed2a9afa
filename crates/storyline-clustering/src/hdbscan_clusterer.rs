//! `IClusterer` over the `hdbscan` crate.

use hdbscan::{DistanceMetric, Hdbscan, HdbscanHyperParams};
use storyline_core::config::ClusteringConfig;
use storyline_core::errors::{ClusteringError, StorylineResult};
use storyline_core::models::TopicId;
use storyline_core::traits::IClusterer;
use tracing::debug;

/// Density clustering with Euclidean distance.
///
/// Fewer points than `min_cluster_size` cannot form a cluster, so such input
/// comes back all `Unassigned` without running the algorithm.
pub struct HdbscanClusterer {
    config: ClusteringConfig,
}

impl HdbscanClusterer {
    /// # Errors
    /// Returns `ClusteringError::InvalidParameters` for parameters HDBSCAN
    /// cannot run with.
    pub fn new(config: ClusteringConfig) -> StorylineResult<Self> {
        let invalid = |field: &str, message: &str| ClusteringError::InvalidParameters {
            field: field.to_string(),
            message: message.to_string(),
        };
        if config.min_cluster_size < 2 {
            return Err(invalid("min_cluster_size", "must be at least 2").into());
        }
        if config.min_samples == 0 {
            return Err(invalid("min_samples", "must be greater than 0").into());
        }
        if !config.selection_epsilon.is_finite() || config.selection_epsilon < 0.0 {
            return Err(invalid("selection_epsilon", "must be a finite, non-negative distance").into());
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }
}

impl IClusterer for HdbscanClusterer {
    fn cluster(&self, vectors: &[Vec<f32>]) -> StorylineResult<Vec<TopicId>> {
        let n = vectors.len();
        if n < self.config.min_cluster_size {
            debug!(points = n, "too few points to cluster");
            return Ok(vec![TopicId::Unassigned; n]);
        }

        let hyper_params = HdbscanHyperParams::builder()
            .min_cluster_size(self.config.min_cluster_size)
            .min_samples(self.config.min_samples)
            .epsilon(self.config.selection_epsilon)
            .allow_single_cluster(self.config.allow_single_cluster)
            .dist_metric(DistanceMetric::Euclidean)
            .build();

        let data = vectors.to_vec();
        let labels = Hdbscan::new(&data, hyper_params)
            .cluster()
            .map_err(|e| ClusteringError::ClusteringFailed {
                reason: format!("{e:?}"),
            })?;

        if labels.len() != n {
            return Err(ClusteringError::CountMismatch {
                expected: n,
                actual: labels.len(),
            }
            .into());
        }

        Ok(labels.into_iter().map(TopicId::from_label).collect())
    }

    fn name(&self) -> &str {
        "hdbscan"
    }
}
