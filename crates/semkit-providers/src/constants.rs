//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in semkit-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default Ollama embedding model
pub const OLLAMA_DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";

// ============================================================================
// CHAT COMPLETION PROVIDER CONSTANTS
// ============================================================================

/// Default OpenAI chat model
pub const OPENAI_DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Model name reported by the null chat provider
pub const NULL_CHAT_MODEL: &str = "null-chat";

/// Prefix of every reply produced by the null chat provider
pub const NULL_CHAT_REPLY_PREFIX: &str = "[null] ";

/// Context window of 128k-token models (gpt-4o, gpt-4-turbo, gpt-4.1)
pub const CHAT_CONTEXT_TOKENS_128K: usize = 128_000;

/// Context window of gpt-4-32k
pub const CHAT_CONTEXT_TOKENS_GPT4_32K: usize = 32_768;

/// Context window of gpt-4
pub const CHAT_CONTEXT_TOKENS_GPT4: usize = 8_192;

/// Context window of the 16k gpt-3.5 models
pub const CHAT_CONTEXT_TOKENS_GPT35_16K: usize = 16_385;

// ============================================================================
// ENDPOINT CONSTANTS
// ============================================================================

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Ollama server default URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Azure OpenAI REST API version used when none is configured
pub const AZURE_OPENAI_DEFAULT_API_VERSION: &str = "2024-02-01";

/// Azure OpenAI authentication header
pub const AZURE_OPENAI_API_KEY_HEADER: &str = "api-key";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP request timeout error message prefix
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
