use serde::{Deserialize, Serialize};

use super::defaults;

/// Topic clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Smallest group that counts as a topic. Singletons are never topics.
    pub min_cluster_size: usize,
    /// Neighbours needed to seed density.
    pub min_samples: usize,
    /// Distance below which neighbouring clusters merge into one topic.
    /// Larger values give fewer, broader topics.
    pub selection_epsilon: f64,
    /// Allow every event to collapse into a single topic.
    pub allow_single_cluster: bool,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            selection_epsilon: defaults::DEFAULT_SELECTION_EPSILON,
            allow_single_cluster: defaults::DEFAULT_ALLOW_SINGLE_CLUSTER,
        }
    }
}
