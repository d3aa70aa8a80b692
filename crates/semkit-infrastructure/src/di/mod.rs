//! Composition Root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into ready-to-use
//! services. Providers are looked up by name in the linkme registries; there
//! is no container, only plain constructors wired in [`bootstrap::init_app`].

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, build_kernel, init_app};
pub use provider_resolvers::{
    ChatCompletionProviderResolver, EmbeddingProviderResolver, chat_completion_provider_config,
    embedding_provider_config,
};
