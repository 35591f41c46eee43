//! Deterministic embedding providers for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ragmatch::sections::{JobSection, ResumeSection, SectionLabel};
use ragmatch::{EmbeddingProvider, RagConfig, RagError, RagSystem, Result};

const WORD_BUCKETS: usize = 64;
const LABEL_WEIGHT: f32 = 10.0;

/// Bag-of-words embedder with one extra axis per section label.
///
/// A text lights up a label axis when it contains one of that label's
/// example phrases, so header lines land close to their prototypes while
/// ordinary prose stays far from every label.
pub struct KeywordEmbedder {
    phrases: Vec<Vec<String>>,
    calls: AtomicUsize,
    poison: Option<String>,
}

impl KeywordEmbedder {
    pub fn new() -> Self {
        let mut phrases = Vec::new();
        phrases.extend(lowered::<ResumeSection>());
        phrases.extend(lowered::<JobSection>());
        Self {
            phrases,
            calls: AtomicUsize::new(0),
            poison: None,
        }
    }

    /// Fails every batch that contains `marker`
    pub fn failing_on(marker: &str) -> Self {
        Self {
            poison: Some(marker.to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        let mut v = vec![0.0; self.dimension()];

        for (axis, phrases) in self.phrases.iter().enumerate() {
            if phrases.iter().any(|p| lower.contains(p.as_str())) {
                v[axis] += LABEL_WEIGHT;
            }
        }

        for word in lower.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            v[self.phrases.len() + bucket(word)] += 1.0;
        }
        v
    }
}

impl Default for KeywordEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingProvider for KeywordEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(marker) = &self.poison {
            if texts.iter().any(|t| t.contains(marker.as_str())) {
                return Err(RagError::EmbeddingCallFailed(format!("refused batch containing {}", marker)));
            }
        }
        Ok(texts.iter().map(|t| self.embed(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.phrases.len() + WORD_BUCKETS
    }
}

/// Provider that reports itself unusable
pub struct UnavailableEmbedder;

impl EmbeddingProvider for UnavailableEmbedder {
    fn encode(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Err(RagError::EmbeddingUnavailable("no model loaded".to_string()))
    }

    fn dimension(&self) -> usize {
        8
    }

    fn is_available(&self) -> bool {
        false
    }
}

fn lowered<L: SectionLabel>() -> Vec<Vec<String>> {
    L::ALL
        .iter()
        .map(|label| label.example_phrases().iter().map(|p| p.to_lowercase()).collect())
        .collect()
}

fn bucket(word: &str) -> usize {
    let hash = word
        .bytes()
        .fold(7usize, |h, b| h.wrapping_mul(31).wrapping_add(b as usize));
    hash % WORD_BUCKETS
}

/// Engine over a fresh `KeywordEmbedder`, plus a handle to inspect it
pub fn system() -> (RagSystem, Arc<KeywordEmbedder>) {
    system_with(RagConfig::default())
}

pub fn system_with(config: RagConfig) -> (RagSystem, Arc<KeywordEmbedder>) {
    let embedder = Arc::new(KeywordEmbedder::new());
    let system = RagSystem::new(embedder.clone(), &config).expect("engine should build");
    (system, embedder)
}
