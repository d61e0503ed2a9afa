//! ONNX Runtime sentence-embedding provider.
//!
//! Loads a sentence-embedding model (e.g. all-MiniLM-L6-v2 exported to ONNX)
//! via the `ort` crate together with the model's `tokenizer.json`, runs padded
//! batch inference and mean-pools token embeddings over the attention mask.

use std::path::Path;
use std::sync::Mutex;

use ort::session::{Session, SessionInputValue};
use ort::value::Tensor;
use storyline_core::errors::{EmbeddingError, StorylineResult};
use storyline_core::traits::IEmbeddingProvider;
use tokenizers::{Encoding, Tokenizer, TruncationParams};
use tracing::debug;

/// Longest token sequence fed to the model; BERT-family position tables end here.
const MAX_SEQUENCE_LENGTH: usize = 512;

/// ONNX-based embedding provider.
pub struct OnnxProvider {
    /// `Session::run` needs `&mut`, the trait hands out `&self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    dimensions: usize,
    batch_size: usize,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxProvider {}

impl OnnxProvider {
    /// Load an ONNX model and its tokenizer.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelLoadFailed` if either file is missing or
    /// cannot be loaded.
    pub fn load(
        model_path: &str,
        tokenizer_path: &str,
        dimensions: usize,
        batch_size: usize,
    ) -> StorylineResult<Self> {
        let load_failed = |path: &str, reason: String| EmbeddingError::ModelLoadFailed {
            path: path.to_string(),
            reason,
        };

        let path = Path::new(model_path);
        if !path.exists() {
            return Err(load_failed(model_path, "model file not found".to_string()).into());
        }
        if !Path::new(tokenizer_path).exists() {
            return Err(load_failed(tokenizer_path, "tokenizer file not found".to_string()).into());
        }

        let mut tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| load_failed(tokenizer_path, e.to_string()))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQUENCE_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| load_failed(tokenizer_path, e.to_string()))?;

        let session = Session::builder()
            .map_err(|e| load_failed(model_path, e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(model_path, e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(model_path, e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, dims = dimensions, batch_size, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions,
            batch_size: batch_size.max(1),
            model_name,
        })
    }

    /// Run one padded batch through the model.
    fn run_batch(&self, texts: &[String]) -> StorylineResult<Vec<Vec<f32>>> {
        let inference_failed = |reason: String| EmbeddingError::InferenceFailed { reason };

        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let encodings = self
            .tokenizer
            .encode_batch(inputs, true)
            .map_err(|e| inference_failed(format!("tokenization failed: {e}")))?;

        let batch = PaddedBatch::new(&encodings);
        let shape = vec![batch.rows as i64, batch.width as i64];
        let tensor = |data: &[i64]| -> StorylineResult<SessionInputValue<'static>> {
            Tensor::from_array((shape.clone(), data.to_vec()))
                .map(Into::into)
                .map_err(|e| inference_failed(format!("input tensor creation error: {e}")).into())
        };

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_failed(format!("session lock poisoned: {e}")))?;

        // Feed the inputs the model declares, by name.
        let mut model_inputs: Vec<(String, SessionInputValue<'static>)> = Vec::new();
        for input in session.inputs() {
            let value = match input.name() {
                "input_ids" => tensor(&batch.ids)?,
                "attention_mask" => tensor(&batch.mask)?,
                "token_type_ids" => tensor(&batch.type_ids)?,
                other => {
                    return Err(inference_failed(format!("unsupported model input '{other}'")).into())
                }
            };
            model_inputs.push((input.name().to_string(), value));
        }

        let outputs = session
            .run(model_inputs)
            .map_err(|e| inference_failed(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_failed("no output tensor".to_string()))?;

        let (out_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_failed(format!("tensor extraction failed: {e}")))?;

        let mut results = Vec::with_capacity(batch.rows);
        match out_shape.len() {
            // [batch, seq, dims]: mean-pool the positions the mask keeps.
            3 => {
                let seq_out = out_shape[1] as usize;
                let dims = out_shape[2] as usize;
                for row in 0..batch.rows {
                    let offset = row * seq_out * dims;
                    let mut pooled = vec![0.0f32; dims];
                    let mut kept = 0usize;
                    for s in 0..seq_out.min(batch.width) {
                        if batch.mask[row * batch.width + s] == 0 {
                            continue;
                        }
                        let token = &data[offset + s * dims..offset + (s + 1) * dims];
                        for (p, x) in pooled.iter_mut().zip(token) {
                            *p += x;
                        }
                        kept += 1;
                    }
                    let count = kept.max(1) as f32;
                    pooled.iter_mut().for_each(|v| *v /= count);
                    results.push(Self::finish(pooled, self.dimensions)?);
                }
            }
            // [batch, dims]: already pooled.
            2 => {
                let dims = out_shape[1] as usize;
                for row in 0..batch.rows {
                    let pooled = data[row * dims..(row + 1) * dims].to_vec();
                    results.push(Self::finish(pooled, self.dimensions)?);
                }
            }
            _ => {
                return Err(inference_failed(format!(
                    "unexpected output shape: {out_shape:?}"
                ))
                .into());
            }
        }
        Ok(results)
    }

    /// Check the model's width against the configured one, then L2-normalize.
    fn finish(mut embedding: Vec<f32>, expected: usize) -> StorylineResult<Vec<f32>> {
        if embedding.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: embedding.len(),
            }
            .into());
        }
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            embedding.iter_mut().for_each(|v| *v /= norm);
        }
        Ok(embedding)
    }
}

/// Row-major `[rows, width]` model inputs, zero-padded to the longest encoding.
struct PaddedBatch {
    rows: usize,
    width: usize,
    ids: Vec<i64>,
    mask: Vec<i64>,
    type_ids: Vec<i64>,
}

impl PaddedBatch {
    fn new(encodings: &[Encoding]) -> Self {
        let rows = encodings.len();
        let width = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0)
            .max(1);

        let mut ids = vec![0i64; rows * width];
        let mut mask = vec![0i64; rows * width];
        let mut type_ids = vec![0i64; rows * width];
        for (row, encoding) in encodings.iter().enumerate() {
            let offset = row * width;
            let tokens = encoding
                .get_ids()
                .iter()
                .zip(encoding.get_attention_mask())
                .zip(encoding.get_type_ids());
            for (j, ((&id, &m), &t)) in tokens.enumerate() {
                ids[offset + j] = i64::from(id);
                mask[offset + j] = i64::from(m);
                type_ids[offset + j] = i64::from(t);
            }
        }

        Self {
            rows,
            width,
            ids,
            mask,
            type_ids,
        }
    }
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> StorylineResult<Vec<f32>> {
        self.run_batch(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| {
                EmbeddingError::InferenceFailed {
                    reason: "empty model output".to_string(),
                }
                .into()
            })
    }

    fn embed_batch(&self, texts: &[String]) -> StorylineResult<Vec<Vec<f32>>> {
        let mut out = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.batch_size) {
            out.extend(self.run_batch(chunk)?);
        }
        Ok(out)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
