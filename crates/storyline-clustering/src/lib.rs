//! # storyline-clustering
//!
//! Groups events into topics: embed every sentence in one batch, L2-normalize,
//! run HDBSCAN, write the resulting `TopicId` back onto each event.

pub mod hdbscan_clusterer;
pub mod normalize;
pub mod topic_clusterer;

pub use hdbscan_clusterer::HdbscanClusterer;
pub use normalize::{l2_normalize, normalize_rows};
pub use topic_clusterer::TopicClusterer;
