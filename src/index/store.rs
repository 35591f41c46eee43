// Flat vector store with exact search over normalized embeddings
use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::embedding::{dot, encode_normalized, EmbeddingProvider};
use crate::errors::{RagError, Result};
use crate::types::Metadata;

/// Position and similarity of one search hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub score: f32,
    /// Insertion position in the index
    pub position: usize,
}

/// Append-only store of (vector, chunk text, metadata) triples.
///
/// The three lists always have the same length. `add` embeds the whole batch
/// before touching any of them, so a failed batch leaves the index as it was.
pub struct VectorIndex {
    provider: Arc<dyn EmbeddingProvider>,
    dimension: usize,
    vectors: Vec<Vec<f32>>,
    chunks: Vec<String>,
    metadata: Vec<Metadata>,
}

impl VectorIndex {
    /// Create an empty index bound to a provider
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        let dimension = provider.dimension();
        Self {
            provider,
            dimension,
            vectors: Vec::new(),
            chunks: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Embed, normalize and append a batch of chunks with parallel metadata
    pub fn add(&mut self, chunks: Vec<String>, metadata: Vec<Metadata>) -> Result<()> {
        if chunks.len() != metadata.len() {
            return Err(RagError::MetadataMismatch {
                chunks: chunks.len(),
                metadata: metadata.len(),
            });
        }
        if chunks.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = chunks.iter().map(String::as_str).collect();
        let vectors = encode_normalized(self.provider.as_ref(), &texts)?;

        debug!(added = vectors.len(), total = self.vectors.len() + vectors.len(), "index batch appended");

        self.vectors.extend(vectors);
        self.chunks.extend(chunks);
        self.metadata.extend(metadata);
        Ok(())
    }

    /// Exact top-k search by inner product.
    ///
    /// Returns at most `min(top_k, len)` hits, best first, ties in insertion
    /// order. An empty index yields no hits without calling the provider.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<Hit>> {
        if self.vectors.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = encode_normalized(self.provider.as_ref(), &[query])?
            .pop()
            .ok_or_else(|| RagError::EmbeddingCallFailed("no vector for query".to_string()))?;

        let mut hits: Vec<Hit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| Hit {
                score: dot(&query_vector, vector),
                position,
            })
            .collect();

        // stable sort keeps insertion order among equal scores
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k.min(self.vectors.len()));
        Ok(hits)
    }

    /// Drop every vector, chunk and metadata entry
    pub fn reset(&mut self) {
        self.vectors.clear();
        self.chunks.clear();
        self.metadata.clear();
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored chunk texts; equal to `len()`
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, position: usize) -> Option<&str> {
        self.chunks.get(position).map(String::as_str)
    }

    pub fn metadata(&self, position: usize) -> Option<&Metadata> {
        self.metadata.get(position)
    }

    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.provider
    }
}
