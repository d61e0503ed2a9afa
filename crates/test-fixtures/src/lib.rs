//! Golden narratives and deterministic collaborators for Storyline tests.
//!
//! Narratives live as JSON under `narratives/` in this crate and carry the
//! events the default annotator and date parser are expected to extract,
//! in narrative order.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use storyline_core::errors::StorylineResult;
use storyline_core::models::{DateOrder, Granularity, TopicId};
use storyline_core::traits::{IClusterer, IEmbeddingProvider};

/// Root directory of the fixture files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A narrative and the events expected from it.
#[derive(Debug, Clone, Deserialize)]
pub struct NarrativeFixture {
    pub name: String,
    pub description: String,
    pub date_order: DateOrder,
    pub text: String,
    pub expected_events: Vec<ExpectedEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedEvent {
    pub date: NaiveDate,
    pub granularity: Granularity,
    pub raw_date_text: String,
}

/// Load `narratives/<name>.json`.
pub fn narrative(name: &str) -> NarrativeFixture {
    load_fixture(&format!("narratives/{name}.json"))
}

/// Every narrative fixture, sorted by file name.
pub fn all_narratives() -> Vec<NarrativeFixture> {
    list_fixtures("narratives")
        .iter()
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            narrative(&name)
        })
        .collect()
}

/// Hash-derived embedding: same text, same vector.
pub fn text_to_embedding(text: &str, dims: usize) -> Vec<f32> {
    let hash = blake3::hash(text.as_bytes());
    let bytes = hash.as_bytes();
    (0..dims)
        .map(|i| (bytes[i % 32] as f32 / 255.0) * 2.0 - 1.0)
        .collect()
}

/// Deterministic embedder with no notion of meaning.
pub struct DeterministicEmbedder {
    pub dims: usize,
}

impl IEmbeddingProvider for DeterministicEmbedder {
    fn embed(&self, text: &str) -> StorylineResult<Vec<f32>> {
        Ok(text_to_embedding(text, self.dims))
    }
    fn embed_batch(&self, texts: &[String]) -> StorylineResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| text_to_embedding(t, self.dims)).collect())
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "deterministic-test"
    }
}

/// Embeds a sentence onto the axis of the first keyword group it mentions.
///
/// Sentences matching no group land on a trailing axis of their own. A small
/// hash-derived jitter keeps identical sentences apart.
pub struct KeywordEmbedder {
    groups: Vec<Vec<String>>,
}

impl KeywordEmbedder {
    pub fn new(groups: &[&[&str]]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|g| g.iter().map(|k| k.to_lowercase()).collect())
                .collect(),
        }
    }

    /// Keyword groups for the `multi_project` narrative.
    pub fn multi_project() -> Self {
        Self::new(&[
            &["deep blue"],
            &["urban greenway"],
            &["capital horizon"],
            &["atlas marine"],
            &["electric pulse"],
        ])
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        let axis = self
            .groups
            .iter()
            .position(|g| g.iter().any(|k| lower.contains(k.as_str())))
            .unwrap_or(self.groups.len());
        let jitter = text_to_embedding(text, self.dimensions());
        jitter
            .iter()
            .enumerate()
            .map(|(i, j)| {
                let base = if i == axis { 1.0 } else { 0.0 };
                base + j * 0.01
            })
            .collect()
    }
}

impl IEmbeddingProvider for KeywordEmbedder {
    fn embed(&self, text: &str) -> StorylineResult<Vec<f32>> {
        Ok(self.vector(text))
    }
    fn embed_batch(&self, texts: &[String]) -> StorylineResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }
    fn dimensions(&self) -> usize {
        self.groups.len() + 1
    }
    fn name(&self) -> &str {
        "keyword-test"
    }
}

/// Clusterer that replays fixed raw labels, `-1` meaning noise.
pub struct FixedClusterer {
    pub labels: Vec<i32>,
}

impl IClusterer for FixedClusterer {
    fn cluster(&self, _vectors: &[Vec<f32>]) -> StorylineResult<Vec<TopicId>> {
        Ok(self.labels.iter().map(|&l| TopicId::from_label(l)).collect())
    }
    fn name(&self) -> &str {
        "fixed-test"
    }
}
