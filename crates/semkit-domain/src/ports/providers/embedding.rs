use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Generation Interface
///
/// Contract for services that turn text into embedding vectors. Callers hold
/// the provider as `Arc<dyn EmbeddingProvider>` handed to them by the
/// composition root.
///
/// # Cancellation
///
/// Implementations are plain futures: dropping the future returned by
/// [`embed`](Self::embed) aborts the outstanding request. Callers that accept
/// a cancellation token race the call against it and drop the loser.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()` unless a cheaper single-item path exists.
///
/// # Example
///
/// ```ignore
/// let provider: Arc<dyn EmbeddingProvider> = kernel.embedding_provider()?;
/// let embedding = provider.embed("The quick brown fox").await?;
/// println!("{} dimensions", embedding.dimensions);
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of the embeddings this provider produces
    fn dimensions(&self) -> usize;

    /// Name of this provider implementation (e.g., "openai", "ollama")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
