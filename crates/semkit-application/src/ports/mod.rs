//! Application Port Interfaces
//!
//! - **registry/** - Auto-registration system for provider implementations
//! - **services.rs** - Use case interfaces consumed by the host

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use semkit_domain::ports::providers::{ChatCompletionProvider, EmbeddingProvider};

pub use registry::{
    ChatCompletionProviderConfig, ChatCompletionProviderEntry, EmbeddingProviderConfig,
    EmbeddingProviderEntry, list_chat_completion_providers, list_embedding_providers,
    resolve_chat_completion_provider, resolve_embedding_provider,
};
pub use services::{QuestionAnsweringInterface, StringSimilarityComparer};
