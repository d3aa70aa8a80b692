//! Composition Root Bootstrap
//!
//! Builds the kernel and the use cases from configuration.
//!
//! ```text
//! AppConfig → Resolvers → linkme registry → Kernel → Use cases
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let score = context
//!     .similarity_comparer()
//!     .compare("a cat", "a kitten", &CancellationToken::new())
//!     .await?;
//! ```

use std::sync::Arc;

use semkit_application::Kernel;
use semkit_application::ports::services::{QuestionAnsweringInterface, StringSimilarityComparer};
use semkit_application::use_cases::{CosineStringSimilarityComparer, QuestionAnsweringService};
use semkit_domain::error::{Error, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::di::provider_resolvers::{ChatCompletionProviderResolver, EmbeddingProviderResolver};

/// Application context: configuration, kernel and the services built on it
pub struct AppContext {
    config: Arc<AppConfig>,
    kernel: Kernel,
    similarity_comparer: Arc<dyn StringSimilarityComparer>,
    question_answering: Arc<dyn QuestionAnsweringInterface>,
}

impl AppContext {
    /// Configuration the context was built from
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Kernel holding the resolved AI services
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Cosine similarity comparer over the kernel's embedding service
    pub fn similarity_comparer(&self) -> Arc<dyn StringSimilarityComparer> {
        Arc::clone(&self.similarity_comparer)
    }

    /// Question answering over the kernel's chat completion service
    pub fn question_answering(&self) -> Arc<dyn QuestionAnsweringInterface> {
        Arc::clone(&self.question_answering)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("kernel", &self.kernel)
            .finish_non_exhaustive()
    }
}

/// Resolve the configured AI services and bundle them in a kernel
pub fn build_kernel(config: &Arc<AppConfig>) -> Result<Kernel> {
    let embedding_provider = EmbeddingProviderResolver::new(Arc::clone(config))
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Embedding: {e}")))?;

    let chat_completion_provider = ChatCompletionProviderResolver::new(Arc::clone(config))
        .resolve_from_config()
        .map_err(|e| Error::configuration(format!("Chat completion: {e}")))?;

    info!(
        embedding = embedding_provider.provider_name(),
        chat_completion = chat_completion_provider.provider_name(),
        chat_model = chat_completion_provider.model(),
        "Resolved AI services"
    );

    Ok(Kernel::builder()
        .with_embedding_provider(embedding_provider)
        .with_chat_completion_provider(chat_completion_provider)
        .build())
}

/// Initialize application context from configuration
///
/// Providers are auto-registered via linkme distributed slices when
/// semkit-providers is linked, which this crate guarantees.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let config = Arc::new(config);
    let kernel = build_kernel(&config)?;

    let similarity_comparer: Arc<dyn StringSimilarityComparer> =
        Arc::new(CosineStringSimilarityComparer::from_kernel(&kernel)?);
    let question_answering: Arc<dyn QuestionAnsweringInterface> = Arc::new(
        QuestionAnsweringService::from_kernel(&kernel, config.question_answering.to_options())?,
    );

    info!("Application context initialized");

    Ok(AppContext {
        config,
        kernel,
        similarity_comparer,
        question_answering,
    })
}
