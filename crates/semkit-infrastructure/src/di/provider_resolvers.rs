//! Provider Resolvers
//!
//! Wrap the linkme registry resolution so the composition root can build
//! providers from the application configuration.
//!
//! ## Pattern
//!
//! ```text
//! AppConfig → Resolver → linkme registry → Arc<dyn Provider>
//! ```

use std::sync::Arc;
use std::time::Duration;

use semkit_application::ports::registry::{
    ChatCompletionProviderConfig, EmbeddingProviderConfig, list_chat_completion_providers,
    list_embedding_providers, resolve_chat_completion_provider, resolve_embedding_provider,
};
use semkit_application::ports::{ChatCompletionProvider, EmbeddingProvider};

use crate::config::{AppConfig, SemanticKernelConfig};

/// Registry config for the embedding service described by `config`
pub fn embedding_provider_config(config: &SemanticKernelConfig) -> EmbeddingProviderConfig {
    EmbeddingProviderConfig {
        provider: config.embedding_provider.clone(),
        model: config.embeddings_model_name.clone(),
        deployment: config.embeddings_model_deployment_name.clone(),
        api_key: config.key.clone(),
        base_url: config.endpoint.clone(),
        api_version: config.api_version.clone(),
        timeout: Some(Duration::from_secs(config.request_timeout_secs)),
        ..Default::default()
    }
}

/// Registry config for the chat completion service described by `config`
pub fn chat_completion_provider_config(
    config: &SemanticKernelConfig,
) -> ChatCompletionProviderConfig {
    ChatCompletionProviderConfig {
        provider: config.chat_provider.clone(),
        model: config.chat_model_name.clone(),
        deployment: config.chat_model_deployment_name.clone(),
        api_key: config.key.clone(),
        base_url: config.endpoint.clone(),
        api_version: config.api_version.clone(),
        max_context_tokens: config.chat_max_context_tokens,
        timeout: Some(Duration::from_secs(config.request_timeout_secs)),
        ..Default::default()
    }
}

// ============================================================================
// Embedding Provider Resolver
// ============================================================================

/// Resolver for embedding providers
pub struct EmbeddingProviderResolver {
    config: Arc<AppConfig>,
}

impl EmbeddingProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn EmbeddingProvider>, String> {
        resolve_embedding_provider(&embedding_provider_config(&self.config.semantic_kernel))
    }

    /// List available embedding providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_embedding_providers()
    }
}

impl std::fmt::Debug for EmbeddingProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProviderResolver")
            .field("provider", &self.config.semantic_kernel.embedding_provider)
            .finish()
    }
}

// ============================================================================
// Chat Completion Provider Resolver
// ============================================================================

/// Resolver for chat completion providers
pub struct ChatCompletionProviderResolver {
    config: Arc<AppConfig>,
}

impl ChatCompletionProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn ChatCompletionProvider>, String> {
        resolve_chat_completion_provider(&chat_completion_provider_config(
            &self.config.semantic_kernel,
        ))
    }

    /// List available chat completion providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_chat_completion_providers()
    }
}

impl std::fmt::Debug for ChatCompletionProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionProviderResolver")
            .field("provider", &self.config.semantic_kernel.chat_provider)
            .finish()
    }
}
