//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings produced by an
//! embedding-generation service.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// An ordered, fixed-length sequence of floats that places a piece of text in
/// a semantic vector space. Embeddings are produced by an
/// [`EmbeddingProvider`](crate::ports::providers::EmbeddingProvider) and are
/// consumed immutably.
///
/// ## Example
///
/// ```rust
/// use semkit_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "text-embedding-ada-002");
/// assert_eq!(embedding.dimensions, 3);
/// assert!(!embedding.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding whose dimensions match the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Number of values actually present in the vector
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    /// Whether the vector holds no values
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    /// Borrow the raw vector values
    pub fn as_slice(&self) -> &[f32] {
        &self.vector
    }
}
