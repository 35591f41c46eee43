// Sentence embeddings via a BERT-family model running on Candle
use anyhow::{Context, Result as AnyResult};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::{PaddingParams, Tokenizer, TruncationParams};
use tracing::{debug, info};

use crate::config::EmbeddingConfig;
use crate::embedding::EmbeddingProvider;
use crate::errors::{RagError, Result};

const MAX_SEQUENCE_TOKENS: usize = 512;

/// Sentence-transformer embedder (all-MiniLM-L6-v2 by default)
pub struct BertEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    dimension: usize,
    model_id: String,
}

impl BertEmbedder {
    /// Download (first use) and load the configured model.
    ///
    /// Any failure here leaves the engine without a provider, so it is
    /// reported as `EmbeddingUnavailable`.
    pub fn load(config: &EmbeddingConfig) -> Result<Self> {
        Self::try_load(config).map_err(|e| RagError::EmbeddingUnavailable(format!("{:#}", e)))
    }

    fn try_load(config: &EmbeddingConfig) -> AnyResult<Self> {
        let device = Device::Cpu;

        let api = Api::new().context("Failed to create HuggingFace API client")?;
        let repo = api.repo(Repo::with_revision(
            config.model_id.clone(),
            RepoType::Model,
            config.revision.clone(),
        ));

        let config_path = repo.get("config.json")
            .context("Failed to download model config")?;
        let tokenizer_path = repo.get("tokenizer.json")
            .context("Failed to download tokenizer")?;
        let weights_path = repo.get("model.safetensors")
            .context("Failed to download model weights")?;

        let config_contents = std::fs::read_to_string(config_path)
            .context("Failed to read config file")?;
        let bert_config: Config = serde_json::from_str(&config_contents)
            .context("Failed to parse model config")?;
        let raw_config: serde_json::Value = serde_json::from_str(&config_contents)
            .context("Failed to parse model config")?;
        let dimension = raw_config
            .get("hidden_size")
            .and_then(|v| v.as_u64())
            .context("Model config has no hidden_size")? as usize;

        let mut tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
        tokenizer.with_padding(Some(PaddingParams::default()));
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQUENCE_TOKENS,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Failed to configure truncation: {}", e))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .context("Failed to load model weights")?
        };

        let model = BertModel::load(vb, &bert_config)
            .context("Failed to create BERT model")?;

        info!(model = %config.model_id, dimension, "embedding model loaded");

        Ok(Self {
            model,
            tokenizer,
            device,
            dimension,
            model_id: config.model_id.clone(),
        })
    }

    /// Model identifier this embedder was loaded from
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    fn embed_batch(&self, texts: &[&str]) -> AnyResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let encodings = self.tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

        let batch_size = encodings.len();
        let max_len = encodings.iter().map(|e| e.get_ids().len()).max().unwrap_or(0);

        // Padding is configured on the tokenizer; the manual pass keeps shapes
        // rectangular even if a tokenizer file overrides it.
        let mut flat_ids = vec![0u32; batch_size * max_len];
        let mut flat_mask = vec![0u32; batch_size * max_len];
        for (i, encoding) in encodings.iter().enumerate() {
            let ids = encoding.get_ids();
            let mask = encoding.get_attention_mask();
            flat_ids[i * max_len..i * max_len + ids.len()].copy_from_slice(ids);
            flat_mask[i * max_len..i * max_len + mask.len()].copy_from_slice(mask);
        }

        let token_ids = Tensor::from_vec(flat_ids, (batch_size, max_len), &self.device)?;
        let attention_mask = Tensor::from_vec(flat_mask, (batch_size, max_len), &self.device)?;
        let token_type_ids = token_ids.zeros_like()?;

        let hidden = self.model.forward(&token_ids, &token_type_ids, Some(&attention_mask))?;
        let pooled = Self::mean_pool(&hidden, &attention_mask)?;

        debug!(batch_size, max_len, "encoded batch");
        Ok(pooled.to_vec2::<f32>()?)
    }

    /// Mean pooling with attention mask
    fn mean_pool(embeddings: &Tensor, attention_mask: &Tensor) -> AnyResult<Tensor> {
        let mask_expanded = attention_mask
            .unsqueeze(2)?
            .expand(embeddings.shape())?
            .to_dtype(embeddings.dtype())?;

        let sum_embeddings = (embeddings * &mask_expanded)?.sum(1)?;
        let sum_mask = mask_expanded.sum(1)?.clamp(1e-9, f64::MAX)?;

        Ok(sum_embeddings.broadcast_div(&sum_mask)?)
    }
}

impl EmbeddingProvider for BertEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.embed_batch(texts)
            .map_err(|e| RagError::EmbeddingCallFailed(format!("{:#}", e)))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
