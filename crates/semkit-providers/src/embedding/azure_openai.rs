//! Azure OpenAI Embedding Provider
//!
//! Implements the `EmbeddingProvider` port against an Azure OpenAI resource.
//! Requests are addressed to a deployment rather than a model and are
//! authenticated with the `api-key` header.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use semkit_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use semkit_domain::error::Result;
use semkit_domain::ports::providers::EmbeddingProvider;
use semkit_domain::value_objects::Embedding;

use crate::constants::{
    AZURE_OPENAI_API_KEY_HEADER, AZURE_OPENAI_DEFAULT_API_VERSION, CONTENT_TYPE_JSON,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use crate::embedding::helpers::{openai_model_dimensions, parse_openai_embeddings};
use crate::utils::{
    HttpResponseUtils, ServiceKind, azure_deployment_url, build_http_client, normalize_api_key,
};

/// Azure OpenAI embedding provider
///
/// `model` is only used to report dimensions and to label embeddings; the
/// deployment decides which model actually runs.
pub struct AzureOpenAIEmbeddingProvider {
    endpoint: String,
    deployment: String,
    api_version: String,
    api_key: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl AzureOpenAIEmbeddingProvider {
    /// Create a new Azure OpenAI embedding provider
    ///
    /// # Arguments
    /// * `endpoint` - Resource endpoint (e.g., "https://my-resource.openai.azure.com")
    /// * `deployment` - Embedding deployment name
    /// * `api_version` - REST API version query parameter
    /// * `api_key` - Resource key
    /// * `model` - Model behind the deployment (e.g., "text-embedding-ada-002")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        endpoint: &str,
        deployment: String,
        api_version: String,
        api_key: &str,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            deployment,
            api_version,
            api_key: normalize_api_key(api_key),
            model,
            timeout,
            http_client,
        }
    }

    /// Full URL of the deployment's embeddings operation
    pub fn embeddings_url(&self) -> Result<Url> {
        azure_deployment_url(
            &self.endpoint,
            &self.deployment,
            &["embeddings"],
            &self.api_version,
            ServiceKind::Embedding,
        )
    }

    /// Get the deployment name
    pub fn deployment(&self) -> &str {
        &self.deployment
    }
}

#[async_trait]
impl EmbeddingProvider for AzureOpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http_client
            .post(self.embeddings_url()?)
            .header(AZURE_OPENAI_API_KEY_HEADER, &self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&serde_json::json!({ "input": texts }))
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(&e, self.timeout, ServiceKind::Embedding))?;

        let response_data =
            HttpResponseUtils::check_and_parse(response, "Azure OpenAI", ServiceKind::Embedding)
                .await?;
        parse_openai_embeddings(&response_data, texts.len(), &self.model)
    }

    fn dimensions(&self) -> usize {
        openai_model_dimensions(&self.model)
    }

    fn provider_name(&self) -> &str {
        "azure-openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn azure_openai_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let endpoint = config
        .base_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| "Azure OpenAI embedding provider requires an endpoint".to_string())?;
    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "Azure OpenAI embedding provider requires an API key".to_string())?;
    let deployment = config
        .deployment
        .clone()
        .ok_or_else(|| "Azure OpenAI embedding provider requires a deployment name".to_string())?;
    let model = config.model.clone().unwrap_or_else(|| deployment.clone());
    let api_version = config
        .api_version
        .clone()
        .unwrap_or_else(|| AZURE_OPENAI_DEFAULT_API_VERSION.to_string());
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = build_http_client(timeout)?;

    let provider = AzureOpenAIEmbeddingProvider::new(
        endpoint,
        deployment,
        api_version,
        api_key,
        model,
        timeout,
        http_client,
    );
    provider.embeddings_url().map_err(|e| e.to_string())?;
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static AZURE_OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "azure-openai",
    description: "Azure OpenAI embedding provider (deployment-scoped, api-key auth)",
    factory: azure_openai_factory,
};
