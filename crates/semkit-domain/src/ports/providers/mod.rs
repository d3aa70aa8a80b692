//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text embedding generation services |
//! | [`ChatCompletionProvider`] | Chat completion services |

/// Chat completion provider port
pub mod chat_completion;
/// Embedding provider port
pub mod embedding;

pub use chat_completion::ChatCompletionProvider;
pub use embedding::EmbeddingProvider;
