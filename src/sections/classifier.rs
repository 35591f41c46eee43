// Header detection and section content extraction
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::embedding::{encode_normalized, EmbeddingProvider};
use crate::errors::Result;
use crate::sections::prototypes::PrototypeSet;
use crate::sections::taxonomy::SectionLabel;

/// Name of the pseudo-section holding text before the first header
pub const HEADER_SECTION: &str = "header";

/// Key of an extracted section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey<L> {
    /// Content preceding the first recognized header
    Header,
    Label(L),
}

impl<L: SectionLabel> SectionKey<L> {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Header => HEADER_SECTION,
            SectionKey::Label(label) => label.as_str(),
        }
    }
}

impl<L: SectionLabel> fmt::Display for SectionKey<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section contents of one document, keyed by label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSections<L: SectionLabel> {
    sections: BTreeMap<SectionKey<L>, String>,
}

impl<L: SectionLabel> ExtractedSections<L> {
    /// Look a section up by its string name (`"header"` or a label name)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, text)| text.as_str())
    }

    pub fn label(&self, label: L) -> Option<&str> {
        self.sections.get(&SectionKey::Label(label)).map(String::as_str)
    }

    pub fn header(&self) -> Option<&str> {
        self.sections.get(&SectionKey::Header).map(String::as_str)
    }

    /// Section names present, header first then taxonomy order
    pub fn names(&self) -> Vec<&'static str> {
        self.sections.keys().map(SectionKey::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey<L>, &str)> {
        self.sections.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Plain name → content map for callers outside the engine
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.sections
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.clone()))
            .collect()
    }
}

impl<L: SectionLabel> Serialize for ExtractedSections<L> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_string_map().serialize(serializer)
    }
}

/// Assigns header-like lines to section labels by prototype similarity
pub struct SectionClassifier {
    provider: Arc<dyn EmbeddingProvider>,
    threshold: f32,
    max_header_chars: usize,
}

impl SectionClassifier {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: &ClassifierConfig) -> Self {
        Self {
            provider,
            threshold: config.threshold,
            max_header_chars: config.max_header_chars,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// A line may be a header if it is non-empty and short
    pub fn is_candidate_header(&self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && trimmed.chars().count() < self.max_header_chars
    }

    /// Map of 0-based line number → label for every line recognized as a header.
    ///
    /// A candidate gets its best label only when the similarity is strictly
    /// above the threshold.
    pub fn classify<L: SectionLabel>(
        &self,
        text: &str,
        prototypes: &PrototypeSet<L>,
    ) -> Result<BTreeMap<usize, L>> {
        let candidates: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| self.is_candidate_header(line))
            .map(|(n, line)| (n, line.trim()))
            .collect();

        if candidates.is_empty() || prototypes.is_empty() {
            return Ok(BTreeMap::new());
        }

        let texts: Vec<&str> = candidates.iter().map(|(_, line)| *line).collect();
        let vectors = encode_normalized(self.provider.as_ref(), &texts)?;

        let mut labels = BTreeMap::new();
        for ((line_number, _), vector) in candidates.iter().zip(vectors.iter()) {
            if let Some((label, score)) = prototypes.best_match(vector) {
                if score > self.threshold {
                    labels.insert(*line_number, label);
                }
            }
        }

        debug!(candidates = candidates.len(), headers = labels.len(), "lines classified");
        Ok(labels)
    }

    /// Split a document into labeled sections.
    ///
    /// Lines before the first header go to the `header` pseudo-section; every
    /// later line belongs to the closest preceding header. Text after a
    /// `:` on a header line belongs to that header's section. Blank lines
    /// are dropped, repeated labels are concatenated and empty sections are
    /// omitted.
    pub fn extract_sections<L: SectionLabel>(
        &self,
        text: &str,
        prototypes: &PrototypeSet<L>,
    ) -> Result<ExtractedSections<L>> {
        let headers = self.classify(text, prototypes)?;

        let mut buffers: BTreeMap<SectionKey<L>, Vec<&str>> = BTreeMap::new();
        let mut current = SectionKey::Header;

        for (line_number, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(label) = headers.get(&line_number) {
                current = SectionKey::Label(*label);
                if let Some((_, rest)) = trimmed.split_once(':') {
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        buffers.entry(current).or_default().push(rest);
                    }
                }
                continue;
            }

            buffers.entry(current).or_default().push(trimmed);
        }

        let sections = buffers
            .into_iter()
            .filter_map(|(key, lines)| {
                let content = lines.join("\n").trim().to_string();
                (!content.is_empty()).then_some((key, content))
            })
            .collect();

        Ok(ExtractedSections { sections })
    }
}
