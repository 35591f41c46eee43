//! Configuration management for ragmatch
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.ragmatch/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{RagError, Result};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Passage splitting, measured in characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

/// Search and context assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub max_context_length: usize,
    /// Smallest truncated fragment worth appending to a context
    pub min_fragment_chars: usize,
}

/// Section header classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Cosine similarity a header must exceed to receive a label
    pub threshold: f32,
    /// Lines at least this long are never treated as headers
    pub max_header_chars: usize,
}

/// Sentence-transformer model selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    pub model_id: String,
    pub revision: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 50,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            max_context_length: 2000,
            min_fragment_chars: 100,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            max_header_chars: 60,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_id: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            revision: "main".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl RagConfig {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RagError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: RagConfig = toml::from_str(&contents)
            .map_err(|e| RagError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, falling back to built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(RagConfig::default())
    }

    /// Standard config location, if a home directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ragmatch").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(RagError::ConfigError(
                "chunk_size must be greater than 0".to_string(),
            ));
        }

        if self.chunking.overlap >= self.chunking.chunk_size {
            return Err(RagError::ConfigError(
                "overlap must be less than chunk_size".to_string(),
            ));
        }

        if !(-1.0..=1.0).contains(&self.classifier.threshold) {
            return Err(RagError::ConfigError(
                "classifier threshold must be between -1.0 and 1.0".to_string(),
            ));
        }

        if self.classifier.max_header_chars == 0 {
            return Err(RagError::ConfigError(
                "max_header_chars must be greater than 0".to_string(),
            ));
        }

        if self.embedding.model_id.trim().is_empty() {
            return Err(RagError::ConfigError("model_id must not be empty".to_string()));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| RagError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
