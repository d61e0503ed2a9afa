//! Selection epsilon behaviour of the HDBSCAN clusterer.

use std::collections::BTreeSet;

use storyline_clustering::HdbscanClusterer;
use storyline_core::config::ClusteringConfig;
use storyline_core::models::TopicId;
use storyline_core::traits::IClusterer;

/// Five points in a tight square around `(x, y)`.
fn blob(x: f32, y: f32) -> Vec<Vec<f32>> {
    [(0.0, 0.0), (0.01, 0.0), (0.0, 0.01), (0.01, 0.01), (0.005, 0.005)]
        .iter()
        .map(|(dx, dy)| vec![x + dx, y + dy])
        .collect()
}

/// Two blobs 0.3 apart, and a third far from both.
fn nested_points() -> Vec<Vec<f32>> {
    let mut points = blob(0.0, 0.0);
    points.extend(blob(0.3, 0.0));
    points.extend(blob(5.0, 5.0));
    points
}

fn cluster_with_epsilon(epsilon: f64) -> Vec<TopicId> {
    let config = ClusteringConfig {
        min_cluster_size: 3,
        min_samples: 2,
        selection_epsilon: epsilon,
        ..Default::default()
    };
    HdbscanClusterer::new(config)
        .unwrap()
        .cluster(&nested_points())
        .unwrap()
}

fn topic_count(topics: &[TopicId]) -> usize {
    topics
        .iter()
        .filter(|t| t.is_assigned())
        .collect::<BTreeSet<_>>()
        .len()
}

#[test]
fn zero_epsilon_keeps_nearby_blobs_apart() {
    let topics = cluster_with_epsilon(0.0);
    assert_eq!(topic_count(&topics), 3);
    assert_ne!(topics[0], topics[5]);
    assert_ne!(topics[0], topics[10]);
}

#[test]
fn larger_epsilon_merges_nearby_blobs() {
    let fine = cluster_with_epsilon(0.0);
    let coarse = cluster_with_epsilon(1.0);

    assert!(topic_count(&coarse) < topic_count(&fine));
    assert_eq!(topic_count(&coarse), 2);
    assert!(coarse[..10].iter().all(|t| *t == coarse[0] && t.is_assigned()));
    assert!(coarse[10..].iter().all(|t| *t == coarse[10] && t.is_assigned()));
    assert_ne!(coarse[0], coarse[10]);
}
