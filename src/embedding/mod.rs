//! Embedding provider seam
//!
//! The engine never produces vectors itself. A provider is loaded once by
//! the caller and injected as `Arc<dyn EmbeddingProvider>`; dropping the last
//! handle releases the model.

pub mod engine;
pub mod normalize;

pub use engine::BertEmbedder;
pub use normalize::{cosine_similarity, dot, l2_norm, l2_normalize, mean_vector};

use crate::errors::Result;

/// Maps text to fixed-dimension float vectors.
///
/// Implementations must be deterministic for a fixed model. Failures are
/// reported as `RagError::EmbeddingCallFailed` and are never replaced by a
/// default vector.
pub trait EmbeddingProvider: Send + Sync {
    /// Encode a batch of texts, one vector per input, in input order
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Output dimension D
    fn dimension(&self) -> usize;

    /// Whether the underlying model is loaded and usable
    fn is_available(&self) -> bool {
        true
    }
}

/// Encode a batch and L2-normalize every vector, checking count and dimension.
pub fn encode_normalized(
    provider: &dyn EmbeddingProvider,
    texts: &[&str],
) -> Result<Vec<Vec<f32>>> {
    use crate::errors::RagError;

    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let mut vectors = provider.encode(texts)?;
    if vectors.len() != texts.len() {
        return Err(RagError::EmbeddingCallFailed(format!(
            "provider returned {} vectors for {} texts",
            vectors.len(),
            texts.len()
        )));
    }

    let expected = provider.dimension();
    for vector in vectors.iter_mut() {
        if vector.len() != expected {
            return Err(RagError::DimensionMismatch {
                expected,
                actual: vector.len(),
            });
        }
        l2_normalize(vector);
    }

    Ok(vectors)
}
