//! Error types for ragmatch
//!
//! Construction-time failures (no embedding model) are fatal for an engine
//! instance; per-call failures leave the index untouched and are recoverable
//! by the caller.

use thiserror::Error;

/// Main error type for the retrieval engine
#[derive(Error, Debug)]
pub enum RagError {
    /// Embedding provider missing or failed to initialize
    #[error("Embedding model unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// A batch encode call failed; no index mutation occurred
    #[error("Embedding call failed: {0}")]
    EmbeddingCallFailed(String),

    /// Provider returned vectors of an unexpected dimension
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Chunk size / overlap rejected before any work begins
    #[error("Invalid chunk parameters: {0}")]
    InvalidChunkParameters(String),

    /// Parallel chunk and metadata lists disagree in length
    #[error("Metadata count {metadata} does not match chunk count {chunks}")]
    MetadataMismatch { chunks: usize, metadata: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, RagError>;

impl RagError {
    /// Whether the engine instance is still usable after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RagError::EmbeddingUnavailable(_))
    }
}
