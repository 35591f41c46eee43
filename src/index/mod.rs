// Exact inner-product vector index
pub mod store;

pub use store::{Hit, VectorIndex};
