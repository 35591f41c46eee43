// Index lifecycle: owns the index, chunker, classifier and prototype sets
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::chunker::TextChunker;
use crate::config::RagConfig;
use crate::embedding::EmbeddingProvider;
use crate::errors::{RagError, Result};
use crate::index::VectorIndex;
use crate::rag::context::{AssembledContext, ContextAssembler};
use crate::rag::reference::SECTION_EXAMPLES;
use crate::sections::{
    ExtractedSections, JobSection, PrototypeSet, ResumeSection, SectionClassifier, SectionLabel,
};
use crate::types::{IndexStats, Metadata, SearchResult};

/// Retrieval engine for one indexing session.
///
/// The index, its chunk texts and metadata are owned here and only mutated
/// through `&mut self`, so adds and resets never interleave with a search on
/// the same instance. Independent instances share nothing but the provider.
pub struct RagSystem {
    provider: Arc<dyn EmbeddingProvider>,
    index: VectorIndex,
    chunker: TextChunker,
    classifier: SectionClassifier,
    assembler: ContextAssembler,
    resume_prototypes: PrototypeSet<ResumeSection>,
    job_prototypes: PrototypeSet<JobSection>,
    default_top_k: usize,
}

impl RagSystem {
    /// Build an engine around a loaded provider.
    ///
    /// Fails with `EmbeddingUnavailable` if the provider reports it is not
    /// usable, since no vector could ever be produced.
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: &RagConfig) -> Result<Self> {
        if !provider.is_available() {
            return Err(RagError::EmbeddingUnavailable(
                "embedding provider reported unavailable".to_string(),
            ));
        }

        let chunker = TextChunker::from_config(&config.chunking)?;
        let resume_prototypes = PrototypeSet::build(provider.as_ref())?;
        let job_prototypes = PrototypeSet::build(provider.as_ref())?;

        info!(
            dimension = provider.dimension(),
            chunk_size = chunker.chunk_size(),
            overlap = chunker.overlap(),
            "retrieval engine ready"
        );

        Ok(Self {
            index: VectorIndex::new(provider.clone()),
            classifier: SectionClassifier::new(provider.clone(), &config.classifier),
            assembler: ContextAssembler::from_config(&config.retrieval),
            default_top_k: config.retrieval.top_k,
            chunker,
            resume_prototypes,
            job_prototypes,
            provider,
        })
    }

    /// Build with default configuration
    pub fn with_defaults(provider: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        Self::new(provider, &RagConfig::default())
    }

    /// Chunk each document and index every chunk in a single batch.
    ///
    /// `metadata[i]`, when present, is copied into every chunk of
    /// `documents[i]`. Nothing is indexed if embedding fails.
    pub fn add_documents(&mut self, documents: &[&str], metadata: &[Metadata]) -> Result<usize> {
        let empty = Metadata::new();
        let mut texts = Vec::new();
        let mut metas = Vec::new();

        for (doc_index, document) in documents.iter().enumerate() {
            let base = metadata.get(doc_index).unwrap_or(&empty);
            for chunk in self.chunker.chunk_document(doc_index, document, base) {
                texts.push(chunk.text);
                metas.push(chunk.metadata);
            }
        }

        if texts.is_empty() {
            return Ok(0);
        }

        let added = texts.len();
        self.index.add(texts, metas)?;
        info!(documents = documents.len(), chunks = added, "documents added to index");
        Ok(added)
    }

    /// Ranked chunks for a query; empty when nothing is indexed
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        if self.index.is_empty() {
            warn!("search on empty index");
            return Ok(Vec::new());
        }

        let hits = self.index.search(query, top_k)?;
        let results = hits
            .into_iter()
            .enumerate()
            .filter_map(|(i, hit)| {
                let text = self.index.chunk(hit.position)?;
                let metadata = self.index.metadata(hit.position)?;
                Some(SearchResult {
                    text: text.to_string(),
                    score: hit.score,
                    rank: i + 1,
                    metadata: metadata.clone(),
                })
            })
            .collect::<Vec<_>>();

        debug!(results = results.len(), top_k, "search complete");
        Ok(results)
    }

    /// Search with the configured default `top_k`
    pub fn search_default(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.search(query, self.default_top_k)
    }

    /// Search and assemble a bounded context
    pub fn assemble_context(
        &self,
        query: &str,
        top_k: usize,
        max_length: usize,
    ) -> Result<AssembledContext> {
        let results = self.search(query, top_k)?;
        Ok(self.assembler.assemble(&results, max_length))
    }

    /// Context string for a query; empty string when nothing matches
    pub fn get_context_for_query(
        &self,
        query: &str,
        top_k: usize,
        max_length: usize,
    ) -> Result<String> {
        Ok(self.assemble_context(query, top_k, max_length)?.text)
    }

    /// Rebuild the index from one document's sections plus the whole document.
    ///
    /// Each non-empty section becomes one chunk tagged
    /// `{type: "section", label}`; the full text is one more chunk tagged
    /// `{type: "full_document"}`. Sections are extracted before the reset, so
    /// a classification failure leaves the previous index in place.
    pub fn build_requirements_index<L: SectionLabel>(
        &mut self,
        document: &str,
        prototypes: &PrototypeSet<L>,
    ) -> Result<usize> {
        let sections = self.classifier.extract_sections(document, prototypes)?;
        self.index_sections(document, &sections)
    }

    /// `build_requirements_index` with the job posting taxonomy
    pub fn build_job_requirements_index(&mut self, job_description: &str) -> Result<usize> {
        let sections = self.extract_job_sections(job_description)?;
        self.index_sections(job_description, &sections)
    }

    fn index_sections<L: SectionLabel>(
        &mut self,
        document: &str,
        sections: &ExtractedSections<L>,
    ) -> Result<usize> {
        self.index.reset();

        let mut texts = Vec::with_capacity(sections.len() + 1);
        let mut metas = Vec::with_capacity(sections.len() + 1);
        for (key, content) in sections.iter() {
            texts.push(content.to_string());
            metas.push(tagged(&[
                ("type", "section"),
                ("label", key.as_str()),
                ("source", "document"),
            ]));
        }

        if !document.trim().is_empty() {
            texts.push(document.to_string());
            metas.push(tagged(&[("type", "full_document"), ("source", "document")]));
        }

        let added = texts.len();
        self.index.add(texts, metas)?;
        info!(sections = sections.len(), chunks = added, "requirements index rebuilt");
        Ok(added)
    }

    /// Rebuild the index from annotated resume section examples, for
    /// grounding resume parsing in known section shapes.
    pub fn build_section_reference_index(&mut self) -> Result<usize> {
        self.index.reset();

        let texts: Vec<String> = SECTION_EXAMPLES.iter().map(|(_, t)| t.to_string()).collect();
        let metas: Vec<Metadata> = SECTION_EXAMPLES
            .iter()
            .map(|(section, _)| tagged(&[("type", "section_example"), ("section", *section)]))
            .collect();

        let added = texts.len();
        self.index.add(texts, metas)?;
        info!(examples = added, "section reference index built");
        Ok(added)
    }

    /// Drop every indexed chunk
    pub fn clear_index(&mut self) {
        self.index.reset();
        info!("vector index cleared");
    }

    pub fn get_stats(&self) -> IndexStats {
        IndexStats {
            total_chunks: self.index.chunk_count(),
            index_size: self.index.len(),
            embedding_dimension: self.index.dimension(),
            model_available: self.provider.is_available(),
        }
    }

    pub fn extract_resume_sections(&self, text: &str) -> Result<ExtractedSections<ResumeSection>> {
        self.classifier.extract_sections(text, &self.resume_prototypes)
    }

    pub fn extract_job_sections(&self, text: &str) -> Result<ExtractedSections<JobSection>> {
        self.classifier.extract_sections(text, &self.job_prototypes)
    }

    pub fn resume_prototypes(&self) -> &PrototypeSet<ResumeSection> {
        &self.resume_prototypes
    }

    pub fn job_prototypes(&self) -> &PrototypeSet<JobSection> {
        &self.job_prototypes
    }

    pub fn chunker(&self) -> &TextChunker {
        &self.chunker
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }
}

fn tagged(pairs: &[(&str, &str)]) -> Metadata {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}
