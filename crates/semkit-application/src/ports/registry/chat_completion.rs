//! Chat Completion Provider Registry
//!
//! Same registration scheme as the embedding registry: providers submit a
//! [`ChatCompletionProviderEntry`] to [`CHAT_COMPLETION_PROVIDERS`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::ChatCompletionProvider;

/// Configuration for chat completion provider creation
#[derive(Debug, Clone, Default)]
pub struct ChatCompletionProviderConfig {
    /// Provider name (e.g., "openai", "azure-openai", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// Deployment name (Azure OpenAI)
    pub deployment: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL or endpoint for the provider API
    pub base_url: Option<String>,
    /// API version query parameter (Azure OpenAI)
    pub api_version: Option<String>,
    /// Context window override, in tokens
    pub max_context_tokens: Option<usize>,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ChatCompletionProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the deployment
    #[must_use]
    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = Some(deployment.into());
        self
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API version
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Override the model's context window
    #[must_use]
    pub fn with_max_context_tokens(mut self, tokens: usize) -> Self {
        self.max_context_tokens = Some(tokens);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Registry entry for chat completion providers
pub struct ChatCompletionProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory:
        fn(&ChatCompletionProviderConfig) -> Result<Arc<dyn ChatCompletionProvider>, String>,
}

#[linkme::distributed_slice]
pub static CHAT_COMPLETION_PROVIDERS: [ChatCompletionProviderEntry] = [..];

/// Resolve chat completion provider by name from registry
pub fn resolve_chat_completion_provider(
    config: &ChatCompletionProviderConfig,
) -> Result<Arc<dyn ChatCompletionProvider>, String> {
    let provider_name = &config.provider;

    for entry in CHAT_COMPLETION_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CHAT_COMPLETION_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown chat completion provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered chat completion providers as (name, description) tuples
pub fn list_chat_completion_providers() -> Vec<(&'static str, &'static str)> {
    CHAT_COMPLETION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
