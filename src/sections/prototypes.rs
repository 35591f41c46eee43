// Prototype vectors: one normalized mean phrase embedding per label
use tracing::debug;

use crate::embedding::{dot, encode_normalized, l2_normalize, mean_vector, EmbeddingProvider};
use crate::errors::{RagError, Result};
use crate::sections::taxonomy::SectionLabel;

/// Immutable label → prototype mapping for one taxonomy
#[derive(Debug, Clone)]
pub struct PrototypeSet<L: SectionLabel> {
    prototypes: Vec<(L, Vec<f32>)>,
}

impl<L: SectionLabel> PrototypeSet<L> {
    /// Embed every example phrase of every label in one batch and average
    /// them per label.
    pub fn build(provider: &dyn EmbeddingProvider) -> Result<Self> {
        let phrases: Vec<(L, &str)> = L::ALL
            .iter()
            .flat_map(|label| label.example_phrases().iter().map(move |p| (*label, *p)))
            .collect();
        let texts: Vec<&str> = phrases.iter().map(|(_, p)| *p).collect();
        let vectors = encode_normalized(provider, &texts)?;

        let mut prototypes = Vec::with_capacity(L::ALL.len());
        for label in L::ALL {
            let members: Vec<Vec<f32>> = phrases
                .iter()
                .zip(vectors.iter())
                .filter(|((l, _), _)| l == label)
                .map(|(_, v)| v.clone())
                .collect();
            let mut mean = mean_vector(&members).ok_or_else(|| {
                RagError::EmbeddingCallFailed(format!("no phrases embedded for {:?}", label))
            })?;
            l2_normalize(&mut mean);
            prototypes.push((*label, mean));
        }

        debug!(labels = prototypes.len(), phrases = texts.len(), "prototype set built");
        Ok(Self { prototypes })
    }

    /// Use precomputed prototype vectors; each is normalized on the way in
    pub fn from_vectors(entries: Vec<(L, Vec<f32>)>) -> Self {
        let prototypes = entries
            .into_iter()
            .map(|(label, mut v)| {
                l2_normalize(&mut v);
                (label, v)
            })
            .collect();
        Self { prototypes }
    }

    /// Label with the highest cosine similarity to a normalized vector.
    ///
    /// Equal scores keep the earlier label.
    pub fn best_match(&self, vector: &[f32]) -> Option<(L, f32)> {
        let mut best: Option<(L, f32)> = None;
        for (label, prototype) in &self.prototypes {
            let score = dot(vector, prototype);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((*label, score)),
            }
        }
        best
    }

    pub fn get(&self, label: L) -> Option<&[f32]> {
        self.prototypes
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (L, &[f32])> {
        self.prototypes.iter().map(|(l, v)| (*l, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
