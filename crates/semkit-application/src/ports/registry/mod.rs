//! Provider Registry
//!
//! Providers submit an entry to a linkme distributed slice at compile time;
//! the host resolves them by the name given in configuration.

/// Chat completion provider registry
pub mod chat_completion;
/// Embedding provider registry
pub mod embedding;

pub use chat_completion::{
    CHAT_COMPLETION_PROVIDERS, ChatCompletionProviderConfig, ChatCompletionProviderEntry,
    list_chat_completion_providers, resolve_chat_completion_provider,
};
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
