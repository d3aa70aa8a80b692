//! OpenAI Embedding Provider
//!
//! Implements the `EmbeddingProvider` port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use semkit_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use semkit_domain::error::Result;
use semkit_domain::ports::providers::EmbeddingProvider;
use semkit_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, HTTP_REQUEST_TIMEOUT_SECS, OPENAI_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_EMBEDDING_MODEL,
};
use crate::embedding::helpers::{openai_model_dimensions, parse_openai_embeddings};
use crate::utils::{
    HttpResponseUtils, ServiceKind, build_http_client, effective_url, normalize_api_key,
};

/// OpenAI embedding provider
///
/// Implements the `EmbeddingProvider` domain port using OpenAI's embedding API.
/// Receives HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use semkit_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = OpenAIEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: normalize_api_key(&api_key),
            base_url: effective_url(base_url.as_deref(), OPENAI_DEFAULT_BASE_URL),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(&e, self.timeout, ServiceKind::Embedding))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI", ServiceKind::Embedding).await
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;
        parse_openai_embeddings(&response_data, texts.len(), &self.model)
    }

    fn dimensions(&self) -> usize {
        openai_model_dimensions(&self.model)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn openai_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "OpenAI embedding provider requires an API key".to_string())?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OPENAI_DEFAULT_EMBEDDING_MODEL.to_string());
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = build_http_client(timeout)?;

    Ok(Arc::new(OpenAIEmbeddingProvider::new(
        api_key,
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI embedding provider (text-embedding-3-small/large, ada-002)",
    factory: openai_factory,
};
