//! AI service configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROVIDER, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Which chat and embedding services back the kernel, and how to reach them
///
/// One endpoint and key are shared by both services, as with a single Azure
/// OpenAI resource hosting a chat and an embeddings deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SemanticKernelConfig {
    /// Registry name of the chat completion provider
    pub chat_provider: String,
    /// Registry name of the embedding provider
    pub embedding_provider: String,
    /// Service endpoint or base URL
    pub endpoint: Option<String>,
    /// API key
    pub key: Option<String>,
    /// REST API version (Azure OpenAI)
    pub api_version: Option<String>,
    /// Chat model name
    pub chat_model_name: Option<String>,
    /// Chat deployment name (Azure OpenAI)
    pub chat_model_deployment_name: Option<String>,
    /// Chat context window override, in tokens
    pub chat_max_context_tokens: Option<usize>,
    /// Embeddings model name
    pub embeddings_model_name: Option<String>,
    /// Embeddings deployment name (Azure OpenAI)
    pub embeddings_model_deployment_name: Option<String>,
    /// Timeout for each request to an AI service
    pub request_timeout_secs: u64,
}

impl Default for SemanticKernelConfig {
    fn default() -> Self {
        Self {
            chat_provider: DEFAULT_PROVIDER.to_string(),
            embedding_provider: DEFAULT_PROVIDER.to_string(),
            endpoint: None,
            key: None,
            api_version: None,
            chat_model_name: None,
            chat_model_deployment_name: None,
            chat_max_context_tokens: None,
            embeddings_model_name: None,
            embeddings_model_deployment_name: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
