//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;
use semkit_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use semkit_domain::error::Result;
use semkit_domain::ports::providers::EmbeddingProvider;
use semkit_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider for testing
///
/// Returns vectors derived only from the input text, so equal texts always
/// produce equal vectors and different texts almost never do. Useful for
/// unit tests and development without requiring an actual embedding service.
///
/// # Example
///
/// ```rust
/// use semkit_providers::embedding::NullEmbeddingProvider;
/// use semkit_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a null provider producing vectors of the given size
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        // FNV-1a seed, then xorshift64 per component
        let mut state = text
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
                (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
            })
            | 1;

        (0..self.dimensions)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                // Map to [-1.0, 1.0)
                ((state >> 40) as f32 / (1u64 << 23) as f32) - 1.0
            })
            .collect()
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.vector_for(text), "null"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL);
    if dimensions == 0 {
        return Err("Null embedding provider requires non-zero dimensions".to_string());
    }
    Ok(Arc::new(NullEmbeddingProvider::with_dimensions(dimensions)))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
