//! TF-IDF hashed-bucket embedding provider.
//!
//! Generates fixed-dimension vectors from term frequency–inverse document
//! frequency scores. Needs no model file, so it is the default provider.

use std::collections::BTreeMap;

use storyline_core::errors::StorylineResult;
use storyline_core::traits::IEmbeddingProvider;

/// Words too common to say anything about a topic.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "been", "before", "being", "between", "both", "but", "by", "can", "did", "do", "does",
    "during", "each", "for", "from", "had", "has", "have", "he", "her", "his", "how", "in",
    "into", "is", "it", "its", "just", "more", "most", "new", "no", "not", "of", "on", "one",
    "only", "or", "other", "our", "out", "over", "she", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "up", "was", "we", "were", "what", "when", "which", "while", "who", "will", "with", "would",
];

/// TF-IDF embedding provider.
///
/// Terms are hashed into `dimensions` buckets. Within a batch each term is
/// weighted by its smoothed inverse document frequency across the batch, so
/// words every sentence shares carry less weight than distinguishing ones.
/// A single `embed` call sees a batch of one and reduces to normalized TF.
pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms, without stop-words or bare numbers.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2 && !s.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_lowercase)
            .filter(|s| !STOPWORDS.contains(&s.as_str()))
            .collect()
    }

    /// Term counts, ordered so accumulation is deterministic.
    fn term_counts(text: &str) -> (BTreeMap<String, f32>, usize) {
        let tokens = Self::tokenize(text);
        let mut tf: BTreeMap<String, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }
        (tf, tokens.len())
    }

    fn weighted_vector(
        &self,
        tf: &BTreeMap<String, f32>,
        total: usize,
        idf: impl Fn(&str) -> f32,
    ) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if total == 0 {
            return vec;
        }

        for (term, count) in tf {
            let freq = count / total as f32;
            vec[Self::hash_term(term, self.dimensions)] += freq * idf(term);
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> StorylineResult<Vec<f32>> {
        let (tf, total) = Self::term_counts(text);
        Ok(self.weighted_vector(&tf, total, |_| 1.0))
    }

    fn embed_batch(&self, texts: &[String]) -> StorylineResult<Vec<Vec<f32>>> {
        let docs: Vec<(BTreeMap<String, f32>, usize)> =
            texts.iter().map(|t| Self::term_counts(t)).collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for (tf, _) in &docs {
            for term in tf.keys() {
                *doc_freq.entry(term.as_str()).or_default() += 1;
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1.
        let n = texts.len() as f32;
        let idf = |term: &str| {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f32;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        };

        Ok(docs
            .iter()
            .map(|(tf, total)| self.weighted_vector(tf, *total, &idf))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }
}
