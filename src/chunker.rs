//! Overlapping, boundary-aware passage splitting
//!
//! Sizes are counted in characters. A window that does not reach the end of
//! the text is pulled back to a sentence end (`.`) in its last
//! [`SENTENCE_WINDOW`] characters, else to a space in its last
//! [`WORD_WINDOW`] characters.
//!
//! Every step advances: when `end - overlap` would not move past the current
//! start, the next window starts at `end` instead.

use crate::config::ChunkingConfig;
use crate::errors::{RagError, Result};
use crate::types::{Chunk, Metadata};

/// How far back from a window end to look for a `.`
pub const SENTENCE_WINDOW: usize = 100;
/// How far back from a window end to look for a space
pub const WORD_WINDOW: usize = 50;

/// Splits text into overlapping passages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunker {
    chunk_size: usize,
    overlap: usize,
}

impl TextChunker {
    /// Create a chunker; rejects `chunk_size == 0` and `overlap >= chunk_size`
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::InvalidChunkParameters(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(RagError::InvalidChunkParameters(format!(
                "overlap ({}) must be less than chunk_size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self { chunk_size, overlap })
    }

    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.overlap)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split `text` into passages.
    ///
    /// Empty text yields nothing; text no longer than `chunk_size` is
    /// returned whole. Longer text is split into trimmed, non-empty
    /// substrings.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        self.spans(text)
            .into_iter()
            .map(|(from, to)| text[from..to].to_string())
            .collect()
    }

    /// Split one document into [`Chunk`] records carrying `base` metadata
    pub fn chunk_document(&self, doc_index: usize, text: &str, base: &Metadata) -> Vec<Chunk> {
        self.chunk(text)
            .into_iter()
            .enumerate()
            .map(|(chunk_index, piece)| Chunk::new(piece, doc_index, chunk_index, base))
            .collect()
    }

    /// Byte spans of each passage
    fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        if len <= self.chunk_size {
            return vec![(0, text.len())];
        }

        // byte offset of every char position, plus the end of the text
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();

        let mut spans = Vec::new();
        let mut start = 0;

        while start < len {
            let raw_end = start + self.chunk_size;
            let end = if raw_end < len {
                pull_back_to_boundary(&chars, start, raw_end)
            } else {
                len
            };

            let window = &text[offsets[start]..offsets[end]];
            let trimmed = window.trim();
            if !trimmed.is_empty() {
                let lead = window.len() - window.trim_start().len();
                let from = offsets[start] + lead;
                spans.push((from, from + trimmed.len()));
            }

            if end >= len {
                break;
            }

            let next = end.saturating_sub(self.overlap);
            start = if next > start { next } else { end };
        }

        spans
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        let config = ChunkingConfig::default();
        Self {
            chunk_size: config.chunk_size,
            overlap: config.overlap,
        }
    }
}

/// Move `end` back to a sentence or word boundary strictly after `start`
fn pull_back_to_boundary(chars: &[char], start: usize, end: usize) -> usize {
    let sentence_floor = end.saturating_sub(SENTENCE_WINDOW).max(start + 1);
    if let Some(pos) = (sentence_floor..end).rev().find(|&i| chars[i] == '.') {
        return pos + 1;
    }

    let word_floor = end.saturating_sub(WORD_WINDOW).max(start + 1);
    if let Some(pos) = (word_floor..end).rev().find(|&i| chars[i] == ' ') {
        return pos;
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            TextChunker::new(0, 0),
            Err(RagError::InvalidChunkParameters(_))
        ));
        assert!(matches!(
            TextChunker::new(100, 100),
            Err(RagError::InvalidChunkParameters(_))
        ));
        assert!(TextChunker::new(100, 99).is_ok());
    }

    #[test]
    fn test_empty_text() {
        let chunker = TextChunker::default();
        assert!(chunker.chunk("").is_empty());
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunker = TextChunker::new(50, 10).unwrap();
        assert_eq!(chunker.chunk("  short text "), vec!["  short text ".to_string()]);
    }

    #[test]
    fn test_breaks_at_sentence_end() {
        let chunker = TextChunker::new(40, 5).unwrap();
        let text = "First sentence is here. Second sentence runs on for a while longer.";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks[0], "First sentence is here.");
        assert!(chunks.last().unwrap().ends_with("longer."));
    }

    #[test]
    fn test_breaks_at_space_without_sentence() {
        let chunker = TextChunker::new(20, 0).unwrap();
        let text = "alpha beta gamma delta epsilon zeta";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks[0], "alpha beta gamma");
        for chunk in &chunks {
            assert!(!chunk.starts_with(' ') && !chunk.ends_with(' '));
        }
    }

    #[test]
    fn test_raw_boundary_with_overlap() {
        let chunker = TextChunker::new(10, 3).unwrap();
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks[0], "abcdefghij");
        assert_eq!(chunks[1], "hijklmnopq");
        assert_eq!(chunks[2], "opqrstuvwx");
        assert_eq!(chunks[3], "vwxyz");
        assert_eq!(chunks.len(), 4);
    }

    #[test]
    fn test_progress_when_boundary_is_close_to_start() {
        // pulling back to a sentence end leaves end - overlap at or before start
        let chunker = TextChunker::new(10, 8).unwrap();
        let text = "a. b. c. d. e. f. g. h. i. j. k. l.";
        let chunks = chunker.chunk(text);
        assert!(!chunks.is_empty());
        assert!(chunks.len() <= text.len());
        assert!(chunks.last().unwrap().ends_with("l."));
    }

    #[test]
    fn test_multibyte_text() {
        let chunker = TextChunker::new(5, 1).unwrap();
        let text = "héllöwörldçàfé";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks[0], "héllö");
        for chunk in &chunks {
            assert!(text.contains(chunk.as_str()));
            assert!(chunk.chars().count() <= 5);
        }
    }

    #[test]
    fn test_chunk_document_records() {
        let chunker = TextChunker::new(10, 2).unwrap();
        let mut base = Metadata::new();
        base.insert("source".to_string(), serde_json::json!("resume"));

        let chunks = chunker.chunk_document(3, "abcdefghijklmnopqrstuvwxyz", &base);
        assert!(chunks.len() > 1);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.doc_index, 3);
            assert_eq!(chunk.chunk_index, i);
            assert_eq!(chunk.metadata["source"], serde_json::json!("resume"));
        }
    }

    proptest! {
        #[test]
        fn prop_chunks_are_substrings(
            text in "[a-z .]{1,400}",
            chunk_size in 1usize..120,
            overlap_seed in 0usize..120,
        ) {
            let overlap = overlap_seed % chunk_size;
            let chunker = TextChunker::new(chunk_size, overlap).unwrap();
            let chunks = chunker.chunk(&text);

            if text.chars().count() > chunk_size && !text.trim().is_empty() {
                prop_assert!(!chunks.is_empty());
            }
            for chunk in &chunks {
                prop_assert!(text.contains(chunk.as_str()));
                prop_assert!(chunk.chars().count() <= chunk_size);
            }
        }

        #[test]
        fn prop_overlap_without_boundaries(
            text in "[a-z]{1,300}",
            chunk_size in 2usize..60,
            overlap_seed in 0usize..60,
        ) {
            let overlap = overlap_seed % chunk_size;
            let chunker = TextChunker::new(chunk_size, overlap).unwrap();
            let chunks = chunker.chunk(&text);

            for pair in chunks.windows(2) {
                let shared = overlap.min(pair[0].len());
                let suffix = &pair[0][pair[0].len() - shared..];
                prop_assert!(pair[1].starts_with(suffix));
            }
        }
    }
}
