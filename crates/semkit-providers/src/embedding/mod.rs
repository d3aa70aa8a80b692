//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for similarity scoring.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | `NullEmbeddingProvider` | Testing | Complete |
//! | `OpenAIEmbeddingProvider` | Cloud | Complete |
//! | `AzureOpenAIEmbeddingProvider` | Cloud | Complete |
//! | `OllamaEmbeddingProvider` | Local | Complete |
//!
//! ## Provider Selection Guide
//!
//! ### Development/Testing
//! - **Default**: Use `NullEmbeddingProvider` for unit tests and offline runs
//!
//! ### Local/Privacy-First
//! - **Ollama**: Local LLM server with embedding models
//!
//! ### Cloud/Production
//! - **OpenAI**: Public OpenAI API or any compatible endpoint
//! - **Azure OpenAI**: Deployment-scoped models in an Azure resource

pub mod azure_openai;
pub mod helpers;
pub mod null;
pub mod ollama;
pub mod openai;

// Re-export for convenience
pub use azure_openai::AzureOpenAIEmbeddingProvider;
pub use null::NullEmbeddingProvider;
pub use ollama::OllamaEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;
