// Thread-shareable handle around a RagSystem
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::Result;
use crate::rag::system::RagSystem;
use crate::types::{IndexStats, Metadata, SearchResult};

/// Cloneable handle serializing index mutation against searches.
///
/// Searches take a shared lock and may run concurrently; adds, rebuilds and
/// clears take the exclusive lock.
#[derive(Clone)]
pub struct SharedRagSystem {
    inner: Arc<RwLock<RagSystem>>,
}

impl SharedRagSystem {
    pub fn new(system: RagSystem) -> Self {
        Self {
            inner: Arc::new(RwLock::new(system)),
        }
    }

    pub fn add_documents(&self, documents: &[&str], metadata: &[Metadata]) -> Result<usize> {
        self.inner.write().add_documents(documents, metadata)
    }

    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        self.inner.read().search(query, top_k)
    }

    pub fn get_context_for_query(&self, query: &str, top_k: usize, max_length: usize) -> Result<String> {
        self.inner.read().get_context_for_query(query, top_k, max_length)
    }

    pub fn build_job_requirements_index(&self, job_description: &str) -> Result<usize> {
        self.inner.write().build_job_requirements_index(job_description)
    }

    pub fn clear_index(&self) {
        self.inner.write().clear_index();
    }

    pub fn get_stats(&self) -> IndexStats {
        self.inner.read().get_stats()
    }

    /// Run a closure with shared access to the underlying system
    pub fn with_read<T>(&self, f: impl FnOnce(&RagSystem) -> T) -> T {
        f(&self.inner.read())
    }

    /// Run a closure with exclusive access to the underlying system
    pub fn with_write<T>(&self, f: impl FnOnce(&mut RagSystem) -> T) -> T {
        f(&mut self.inner.write())
    }
}
