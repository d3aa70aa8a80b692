//! Kernel
//!
//! The bundle of AI services a host builds once and hands to its use cases.
//! A kernel is an ordinary value owned by the composition root; use cases
//! receive the individual services they need from it at construction time.

use std::fmt;
use std::sync::Arc;

use semkit_domain::error::{Error, Result};
use semkit_domain::ports::providers::{ChatCompletionProvider, EmbeddingProvider};

/// Configured chat completion and embedding services
#[derive(Clone, Default)]
pub struct Kernel {
    chat_completion: Option<Arc<dyn ChatCompletionProvider>>,
    embedding: Option<Arc<dyn EmbeddingProvider>>,
}

impl Kernel {
    /// Start building a kernel
    pub fn builder() -> KernelBuilder {
        KernelBuilder::default()
    }

    /// The chat completion service, which must have been configured
    pub fn chat_completion_provider(&self) -> Result<Arc<dyn ChatCompletionProvider>> {
        self.chat_completion
            .clone()
            .ok_or_else(|| Error::not_found("chat completion service is not registered in the kernel"))
    }

    /// The embedding service, which must have been configured
    pub fn embedding_provider(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        self.embedding
            .clone()
            .ok_or_else(|| Error::not_found("embedding service is not registered in the kernel"))
    }

    /// Whether a chat completion service is configured
    pub fn has_chat_completion(&self) -> bool {
        self.chat_completion.is_some()
    }

    /// Whether an embedding service is configured
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field(
                "chat_completion",
                &self.chat_completion.as_ref().map(|p| p.provider_name()),
            )
            .field(
                "embedding",
                &self.embedding.as_ref().map(|p| p.provider_name()),
            )
            .finish()
    }
}

/// Builder for [`Kernel`]
#[derive(Default)]
pub struct KernelBuilder {
    chat_completion: Option<Arc<dyn ChatCompletionProvider>>,
    embedding: Option<Arc<dyn EmbeddingProvider>>,
}

impl KernelBuilder {
    /// Register the chat completion service
    #[must_use]
    pub fn with_chat_completion_provider(
        mut self,
        provider: Arc<dyn ChatCompletionProvider>,
    ) -> Self {
        self.chat_completion = Some(provider);
        self
    }

    /// Register the embedding service
    #[must_use]
    pub fn with_embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding = Some(provider);
        self
    }

    /// Finish the kernel
    pub fn build(self) -> Kernel {
        Kernel {
            chat_completion: self.chat_completion,
            embedding: self.embedding,
        }
    }
}
