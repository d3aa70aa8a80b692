//! Azure OpenAI Chat Completion Provider
//!
//! Implements the `ChatCompletionProvider` port against a chat deployment in
//! an Azure OpenAI resource.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use semkit_application::ports::registry::{
    CHAT_COMPLETION_PROVIDERS, ChatCompletionProviderConfig, ChatCompletionProviderEntry,
};
use semkit_domain::error::Result;
use semkit_domain::ports::providers::ChatCompletionProvider;
use semkit_domain::value_objects::{ChatCompletion, ChatHistory, ChatRequestSettings};
use tracing::debug;

use crate::chat::helpers::{
    ChatCompletionPayload, context_window_for_model, parse_chat_completion,
};
use crate::constants::{
    AZURE_OPENAI_API_KEY_HEADER, AZURE_OPENAI_DEFAULT_API_VERSION, CONTENT_TYPE_JSON,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use crate::utils::{
    HttpResponseUtils, ServiceKind, azure_deployment_url, build_http_client, normalize_api_key,
};

/// Azure OpenAI chat completion provider
///
/// The deployment selects the model; `model` names what runs behind it and
/// decides the context window.
pub struct AzureOpenAIChatCompletionProvider {
    endpoint: String,
    deployment: String,
    api_version: String,
    api_key: String,
    model: String,
    max_context_tokens: usize,
    timeout: Duration,
    http_client: Client,
}

/// Connection settings for [`AzureOpenAIChatCompletionProvider`]
#[derive(Debug, Clone)]
pub struct AzureOpenAIChatSettings {
    /// Resource endpoint (e.g., "https://my-resource.openai.azure.com")
    pub endpoint: String,
    /// Chat deployment name
    pub deployment: String,
    /// REST API version query parameter
    pub api_version: String,
    /// Resource key
    pub api_key: String,
    /// Model behind the deployment (e.g., "gpt-35-turbo")
    pub model: String,
    /// Context window override
    pub max_context_tokens: Option<usize>,
    /// Request timeout
    pub timeout: Duration,
}

impl AzureOpenAIChatCompletionProvider {
    /// Create a new Azure OpenAI chat completion provider
    pub fn new(settings: AzureOpenAIChatSettings, http_client: Client) -> Self {
        let max_context_tokens = settings
            .max_context_tokens
            .unwrap_or_else(|| context_window_for_model(&settings.model));
        Self {
            endpoint: settings.endpoint.trim().trim_end_matches('/').to_string(),
            deployment: settings.deployment,
            api_version: settings.api_version,
            api_key: normalize_api_key(&settings.api_key),
            model: settings.model,
            max_context_tokens,
            timeout: settings.timeout,
            http_client,
        }
    }

    /// Full URL of the deployment's chat completions operation
    pub fn chat_completions_url(&self) -> Result<Url> {
        azure_deployment_url(
            &self.endpoint,
            &self.deployment,
            &["chat", "completions"],
            &self.api_version,
            ServiceKind::ChatCompletion,
        )
    }

    /// Get the deployment name
    pub fn deployment(&self) -> &str {
        &self.deployment
    }
}

#[async_trait]
impl ChatCompletionProvider for AzureOpenAIChatCompletionProvider {
    async fn complete(
        &self,
        history: &ChatHistory,
        settings: &ChatRequestSettings,
    ) -> Result<ChatCompletion> {
        let payload = ChatCompletionPayload::new(None, history, settings);

        let response = self
            .http_client
            .post(self.chat_completions_url()?)
            .header(AZURE_OPENAI_API_KEY_HEADER, &self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::request_error(&e, self.timeout, ServiceKind::ChatCompletion)
            })?;

        let response_data = HttpResponseUtils::check_and_parse(
            response,
            "Azure OpenAI",
            ServiceKind::ChatCompletion,
        )
        .await?;
        let completion = parse_chat_completion(response_data, &self.model)?;
        debug!(
            deployment = %self.deployment,
            completion_tokens = ?completion.completion_tokens,
            "Azure OpenAI chat completion finished"
        );
        Ok(completion)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_context_tokens(&self) -> usize {
        self.max_context_tokens
    }

    fn provider_name(&self) -> &str {
        "azure-openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn azure_openai_factory(
    config: &ChatCompletionProviderConfig,
) -> std::result::Result<Arc<dyn ChatCompletionProvider>, String> {
    let endpoint = config
        .base_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| "Azure OpenAI chat completion provider requires an endpoint".to_string())?;
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "Azure OpenAI chat completion provider requires an API key".to_string())?;
    let deployment = config.deployment.clone().ok_or_else(|| {
        "Azure OpenAI chat completion provider requires a deployment name".to_string()
    })?;
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = build_http_client(timeout)?;

    let settings = AzureOpenAIChatSettings {
        endpoint,
        model: config.model.clone().unwrap_or_else(|| deployment.clone()),
        deployment,
        api_version: config
            .api_version
            .clone()
            .unwrap_or_else(|| AZURE_OPENAI_DEFAULT_API_VERSION.to_string()),
        api_key,
        max_context_tokens: config.max_context_tokens,
        timeout,
    };
    let provider = AzureOpenAIChatCompletionProvider::new(settings, http_client);
    provider.chat_completions_url().map_err(|e| e.to_string())?;
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CHAT_COMPLETION_PROVIDERS)]
static AZURE_OPENAI_PROVIDER: ChatCompletionProviderEntry = ChatCompletionProviderEntry {
    name: "azure-openai",
    description: "Azure OpenAI chat completion provider (deployment-scoped, api-key auth)",
    factory: azure_openai_factory,
};
