//! Chunk, search and statistics records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form metadata attached to every indexed chunk
pub type Metadata = serde_json::Map<String, Value>;

/// A bounded substring of a source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    /// Position of the source document in the batch it was added with
    pub doc_index: usize,
    /// Position of this chunk within its document
    pub chunk_index: usize,
    pub metadata: Metadata,
}

impl Chunk {
    /// Build a chunk, stamping its position into the metadata.
    ///
    /// Keys already present in `base` are kept unless they collide with the
    /// position keys.
    pub fn new(text: String, doc_index: usize, chunk_index: usize, base: &Metadata) -> Self {
        let mut metadata = base.clone();
        metadata.insert("doc_index".to_string(), Value::from(doc_index));
        metadata.insert("chunk_index".to_string(), Value::from(chunk_index));
        metadata.insert("chunk_text".to_string(), Value::from(text.clone()));
        Self {
            text,
            doc_index,
            chunk_index,
            metadata,
        }
    }
}

/// One ranked hit returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    /// Cosine similarity in [-1, 1]
    pub score: f32,
    /// 1-based rank in the result list
    pub rank: usize,
    pub metadata: Metadata,
}

/// Read-only snapshot of an index for observability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_chunks: usize,
    pub index_size: usize,
    pub embedding_dimension: usize,
    pub model_available: bool,
}
