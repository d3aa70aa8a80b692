//! OpenAI Chat Completion Provider
//!
//! Implements the `ChatCompletionProvider` port using OpenAI's
//! `chat/completions` API, or any service that speaks it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
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
    CONTENT_TYPE_JSON, HTTP_REQUEST_TIMEOUT_SECS, OPENAI_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_CHAT_MODEL,
};
use crate::utils::{
    HttpResponseUtils, ServiceKind, build_http_client, effective_url, normalize_api_key,
};

/// OpenAI chat completion provider
///
/// Receives HTTP client via constructor injection.
pub struct OpenAIChatCompletionProvider {
    api_key: String,
    base_url: String,
    model: String,
    max_context_tokens: usize,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIChatCompletionProvider {
    /// Create a new OpenAI chat completion provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "gpt-4o-mini")
    /// * `max_context_tokens` - Context window override; looked up from the model when `None`
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: &str,
        base_url: Option<&str>,
        model: String,
        max_context_tokens: Option<usize>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let max_context_tokens =
            max_context_tokens.unwrap_or_else(|| context_window_for_model(&model));
        Self {
            api_key: normalize_api_key(api_key),
            base_url: effective_url(base_url, OPENAI_DEFAULT_BASE_URL),
            model,
            max_context_tokens,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAIChatCompletionProvider {
    async fn complete(
        &self,
        history: &ChatHistory,
        settings: &ChatRequestSettings,
    ) -> Result<ChatCompletion> {
        let payload = ChatCompletionPayload::new(Some(self.model.as_str()), history, settings);

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::request_error(&e, self.timeout, ServiceKind::ChatCompletion)
            })?;

        let response_data =
            HttpResponseUtils::check_and_parse(response, "OpenAI", ServiceKind::ChatCompletion)
                .await?;
        let completion = parse_chat_completion(response_data, &self.model)?;
        debug!(
            model = %completion.model,
            prompt_tokens = ?completion.prompt_tokens,
            completion_tokens = ?completion.completion_tokens,
            "OpenAI chat completion finished"
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
        "openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn openai_factory(
    config: &ChatCompletionProviderConfig,
) -> std::result::Result<Arc<dyn ChatCompletionProvider>, String> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "OpenAI chat completion provider requires an API key".to_string())?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OPENAI_DEFAULT_CHAT_MODEL.to_string());
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = build_http_client(timeout)?;

    Ok(Arc::new(OpenAIChatCompletionProvider::new(
        api_key,
        config.base_url.as_deref(),
        model,
        config.max_context_tokens,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(CHAT_COMPLETION_PROVIDERS)]
static OPENAI_PROVIDER: ChatCompletionProviderEntry = ChatCompletionProviderEntry {
    name: "openai",
    description: "OpenAI chat completion provider (gpt-4o, gpt-4, gpt-3.5-turbo)",
    factory: openai_factory,
};
