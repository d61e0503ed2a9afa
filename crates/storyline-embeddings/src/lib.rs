//! # storyline-embeddings
//!
//! Sentence embedding providers used to group events into topics.
//!
//! ```text
//! create_provider(config)
//! ├── TfIdfFallback (default, no model needed)
//! └── OnnxProvider  (sentence-embedding model via ort)
//! ```

pub mod providers;

pub use providers::{create_provider, OnnxProvider, TfIdfFallback};
