//! Cosine String Similarity Use Case
//!
//! Scores two texts by embedding both and taking the cosine of the angle
//! between the vectors.

use std::sync::Arc;

use async_trait::async_trait;
use semkit_domain::error::{Error, Result};
use semkit_domain::ports::providers::EmbeddingProvider;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain_services::cosine_similarity;
use crate::kernel::Kernel;
use crate::ports::services::StringSimilarityComparer;

/// [`StringSimilarityComparer`] backed by an embedding service
///
/// Both texts are embedded concurrently. The provider is injected by the
/// composition root and shared; the comparer holds no other state.
pub struct CosineStringSimilarityComparer {
    embedding_provider: Arc<dyn EmbeddingProvider>,
}

impl CosineStringSimilarityComparer {
    /// Create a comparer with the given embedding provider
    pub fn new(embedding_provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { embedding_provider }
    }

    /// Create a comparer from the kernel's embedding service
    ///
    /// Fails with [`Error::NotFound`] when the kernel has no embedding service.
    pub fn from_kernel(kernel: &Kernel) -> Result<Self> {
        Ok(Self::new(kernel.embedding_provider()?))
    }
}

#[async_trait]
impl StringSimilarityComparer for CosineStringSimilarityComparer {
    async fn compare(
        &self,
        first: &str,
        second: &str,
        cancellation: &CancellationToken,
    ) -> Result<f64> {
        if cancellation.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let provider = self.embedding_provider.as_ref();
        let embeddings = async { tokio::try_join!(provider.embed(first), provider.embed(second)) };

        // Losing the race drops both embedding futures, aborting their requests.
        let (first_embedding, second_embedding) = tokio::select! {
            biased;
            () = cancellation.cancelled() => {
                debug!(provider = provider.provider_name(), "Similarity comparison cancelled");
                return Err(Error::Cancelled);
            }
            result = embeddings => result?,
        };

        let score = cosine_similarity(&first_embedding.vector, &second_embedding.vector)?;
        debug!(
            provider = provider.provider_name(),
            dimensions = first_embedding.vector.len(),
            score,
            "Computed cosine similarity"
        );
        Ok(score)
    }
}
