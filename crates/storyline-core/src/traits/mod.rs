pub mod annotator;
pub mod clusterer;
pub mod date_parser;
pub mod embedding;

pub use annotator::IAnnotator;
pub use clusterer::IClusterer;
pub use date_parser::IDateParser;
pub use embedding::IEmbeddingProvider;
