// Single source of truth for all default values.

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "storyline.toml";
pub const ENV_PREFIX: &str = "STORYLINE_";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;

// --- Clustering ---
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_MIN_SAMPLES: usize = 1;
pub const DEFAULT_SELECTION_EPSILON: f64 = 0.5;
pub const DEFAULT_ALLOW_SINGLE_CLUSTER: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
