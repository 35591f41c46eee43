//! Type definitions module
//!
//! Records shared between the chunker, the index and the lifecycle manager.

pub mod records;

pub use records::{Chunk, IndexStats, Metadata, SearchResult};
