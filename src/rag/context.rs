// Context assembly under a character budget
use serde::{Deserialize, Serialize};

use crate::config::RetrievalConfig;
use crate::types::SearchResult;

/// Appended to a fragment cut short by the budget
pub const ELLIPSIS: &str = "...";
/// Placed between included fragments
pub const SEPARATOR: &str = "\n\n";

/// Assembled context for prompt grounding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembledContext {
    /// The joined context text
    pub text: String,
    /// Number of results that contributed text
    pub fragment_count: usize,
    /// Whether the last fragment was cut and marked with the ellipsis
    pub truncated: bool,
}

impl AssembledContext {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenates ranked results into a bounded context string.
///
/// Budget accounting counts characters of fragments and separators, so the
/// text never exceeds `max_length` plus the ellipsis.
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    min_fragment_chars: usize,
}

impl ContextAssembler {
    /// Create an assembler with the default minimum fragment size
    pub fn new() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            min_fragment_chars: config.min_fragment_chars,
        }
    }

    pub fn min_fragment_chars(&self) -> usize {
        self.min_fragment_chars
    }

    /// Build context from results already in rank order
    pub fn assemble(&self, results: &[SearchResult], max_length: usize) -> AssembledContext {
        let mut parts: Vec<String> = Vec::new();
        let mut used = 0usize;
        let mut truncated = false;

        for result in results {
            let separator_cost = if parts.is_empty() { 0 } else { SEPARATOR.len() };
            let text_chars = result.text.chars().count();

            if used + separator_cost + text_chars <= max_length {
                parts.push(result.text.clone());
                used += separator_cost + text_chars;
                continue;
            }

            let remaining = max_length.saturating_sub(used + separator_cost);
            if remaining > self.min_fragment_chars {
                let prefix: String = result.text.chars().take(remaining).collect();
                parts.push(format!("{}{}", prefix, ELLIPSIS));
                truncated = true;
            }
            break;
        }

        AssembledContext {
            fragment_count: parts.len(),
            text: parts.join(SEPARATOR),
            truncated,
        }
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Metadata;

    fn result(text: &str, rank: usize) -> SearchResult {
        SearchResult {
            text: text.to_string(),
            score: 1.0 - rank as f32 * 0.1,
            rank,
            metadata: Metadata::new(),
        }
    }

    #[test]
    fn test_empty_results() {
        let context = ContextAssembler::new().assemble(&[], 2000);
        assert!(context.is_empty());
        assert_eq!(context.fragment_count, 0);
        assert!(!context.truncated);
    }

    #[test]
    fn test_joins_with_blank_line() {
        let results = vec![result("first", 1), result("second", 2)];
        let context = ContextAssembler::new().assemble(&results, 2000);
        assert_eq!(context.text, "first\n\nsecond");
        assert_eq!(context.fragment_count, 2);
    }

    #[test]
    fn test_truncates_with_ellipsis_when_room_remains() {
        let results = vec![result(&"a".repeat(100), 1), result(&"b".repeat(500), 2)];
        let context = ContextAssembler::new().assemble(&results, 300);

        assert!(context.truncated);
        assert_eq!(context.fragment_count, 2);
        assert!(context.text.ends_with(ELLIPSIS));
        // 100 + separator + 198 truncated chars + ellipsis
        assert_eq!(context.char_count(), 300 + ELLIPSIS.len());
    }

    #[test]
    fn test_stops_when_remainder_is_too_small() {
        let results = vec![result(&"a".repeat(250), 1), result(&"b".repeat(500), 2)];
        let context = ContextAssembler::new().assemble(&results, 300);

        assert!(!context.truncated);
        assert_eq!(context.fragment_count, 1);
        assert_eq!(context.text, "a".repeat(250));
    }

    #[test]
    fn test_first_result_longer_than_budget() {
        let results = vec![result(&"x".repeat(5000), 1)];
        let context = ContextAssembler::new().assemble(&results, 1500);
        assert!(context.truncated);
        assert_eq!(context.char_count(), 1500 + ELLIPSIS.len());
    }

    #[test]
    fn test_budget_never_exceeded() {
        let lengths = [10, 120, 333, 47, 900, 5, 260];
        let results: Vec<SearchResult> = lengths
            .iter()
            .enumerate()
            .map(|(i, n)| result(&"é".repeat(*n), i + 1))
            .collect();
        let assembler = ContextAssembler::new();

        for max_length in [0, 1, 50, 101, 150, 400, 999, 2000] {
            let context = assembler.assemble(&results, max_length);
            assert!(context.char_count() <= max_length + ELLIPSIS.len());
        }
    }
}
