//! Embedding Provider Registry
//!
//! Auto-registration system for embedding providers using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::EmbeddingProvider;

/// Configuration for embedding provider creation
///
/// Contains all configuration options that an embedding provider might need.
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Provider name (e.g., "ollama", "openai", "azure-openai", "null")
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
    /// Embedding dimensions (if configurable)
    pub dimensions: Option<usize>,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl EmbeddingProviderConfig {
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

    /// Set the dimensions
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add extra configuration
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for embedding providers
///
/// Each embedding provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]`.
pub struct EmbeddingProviderEntry {
    /// Unique provider name (e.g., "ollama", "openai", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>, String>,
}

#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Resolve embedding provider by name from registry
///
/// # Example
///
/// ```ignore
/// let config = EmbeddingProviderConfig::new("ollama")
///     .with_base_url("http://localhost:11434")
///     .with_model("nomic-embed-text");
/// let provider = resolve_embedding_provider(&config)?;
/// ```
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
) -> Result<Arc<dyn EmbeddingProvider>, String> {
    let provider_name = &config.provider;

    for entry in EMBEDDING_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown embedding provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered embedding providers as (name, description) tuples
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
