//! ragmatch - Passage Retrieval for Resume/Job Matching
//!
//! Splits long documents into overlapping passages, embeds them with an
//! injected provider and answers similarity queries under a context budget.
//! Resumes and job postings can also be split into labeled sections.
//!
//! # Architecture
//!
//! - **Chunker**: boundary-aware overlapping text windows
//! - **Index**: exact inner-product search over normalized vectors
//! - **Sections**: prototype-based header classification
//! - **RAG**: index lifecycle and budgeted context assembly

// Core plumbing
pub mod errors;
pub mod config;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use errors::{RagError, Result};
pub use config::RagConfig;

// Retrieval pipeline
pub mod chunker;
pub mod embedding;
pub mod index;
pub mod sections;
pub mod rag;

pub use chunker::TextChunker;
pub use embedding::{BertEmbedder, EmbeddingProvider};
pub use index::VectorIndex;
pub use rag::{AssembledContext, ContextAssembler, RagSystem, SharedRagSystem};
pub use sections::{ExtractedSections, JobSection, ResumeSection, SectionClassifier};
pub use types::{Chunk, IndexStats, Metadata, SearchResult};

// Lexical matching helpers
pub mod keywords;

// Command-line surface
pub mod cli;
