//! Ollama Embedding Provider
//!
//! Implements the `EmbeddingProvider` port using Ollama's local embedding API.
//! Supports various local embedding models like nomic-embed-text, all-minilm, etc.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use semkit_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use semkit_domain::error::{Error, Result};
use semkit_domain::ports::providers::EmbeddingProvider;
use semkit_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_DEFAULT, EMBEDDING_DIMENSION_OLLAMA_MINILM,
    EMBEDDING_DIMENSION_OLLAMA_MXBAI, EMBEDDING_DIMENSION_OLLAMA_NOMIC,
    HTTP_REQUEST_TIMEOUT_SECS, OLLAMA_DEFAULT_BASE_URL, OLLAMA_DEFAULT_EMBEDDING_MODEL,
};
use crate::embedding::helpers::parse_vector;
use crate::utils::{HttpResponseUtils, ServiceKind, build_http_client, effective_url};

/// Ollama embedding provider
///
/// Implements the `EmbeddingProvider` domain port using Ollama's local embedding API.
/// Receives HTTP client via constructor injection.
pub struct OllamaEmbeddingProvider {
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OllamaEmbeddingProvider {
    /// Create a new Ollama embedding provider
    ///
    /// # Arguments
    /// * `base_url` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "nomic-embed-text")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: &str, model: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: effective_url(Some(base_url), OLLAMA_DEFAULT_BASE_URL),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch embedding for a single text
    async fn fetch_single_embedding(&self, text: &str) -> Result<Embedding> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!("{}/api/embeddings", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(&e, self.timeout, ServiceKind::Embedding))?;

        let response_data =
            HttpResponseUtils::check_and_parse(response, "Ollama", ServiceKind::Embedding).await?;

        let vector = parse_vector(&response_data["embedding"]).ok_or_else(|| {
            Error::embedding("Invalid response format: missing embedding array")
        })?;
        Ok(Embedding::new(vector, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        // Ollama API doesn't support batch embedding - process sequentially
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.fetch_single_embedding(text).await?);
        }
        Ok(results)
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "nomic-embed-text" => EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            "all-minilm" => EMBEDDING_DIMENSION_OLLAMA_MINILM,
            "mxbai-embed-large" => EMBEDDING_DIMENSION_OLLAMA_MXBAI,
            _ => EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
        }
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating Ollama embedding provider instances.
fn ollama_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = config
        .base_url
        .as_deref()
        .unwrap_or(OLLAMA_DEFAULT_BASE_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_EMBEDDING_MODEL.to_string());
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = build_http_client(timeout)?;

    Ok(Arc::new(OllamaEmbeddingProvider::new(
        base_url,
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Ollama local embedding provider (nomic-embed-text, all-minilm, etc.)",
    factory: ollama_factory,
};
