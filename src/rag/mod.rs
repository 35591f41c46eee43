// Retrieval-augmented grounding
//
// Components:
// - System: index lifecycle and the caller-facing API
// - Context: budgeted assembly of ranked passages
// - Shared: lock-guarded handle for multi-threaded callers
// - Reference: annotated section examples for grounding resume parsing

pub mod context;
pub mod reference;
pub mod shared;
pub mod system;

// Re-export key types
pub use context::{AssembledContext, ContextAssembler, ELLIPSIS, SEPARATOR};
pub use shared::SharedRagSystem;
pub use system::RagSystem;
