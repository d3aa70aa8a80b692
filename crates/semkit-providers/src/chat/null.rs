//! Null chat completion provider for testing and development
//!
//! Replies without contacting any service.

use std::sync::Arc;

use async_trait::async_trait;
use semkit_application::ports::registry::{
    CHAT_COMPLETION_PROVIDERS, ChatCompletionProviderConfig, ChatCompletionProviderEntry,
};
use semkit_domain::constants::CHAT_MODEL_DEFAULT_CONTEXT_TOKENS;
use semkit_domain::error::Result;
use semkit_domain::ports::providers::ChatCompletionProvider;
use semkit_domain::value_objects::{ChatCompletion, ChatHistory, ChatRequestSettings};

use crate::constants::{NULL_CHAT_MODEL, NULL_CHAT_REPLY_PREFIX};

/// Null chat completion provider for testing
///
/// Replies with the last line of the most recent user message, prefixed
/// with `[null] `. The reply is deterministic, so it can be asserted on.
///
/// # Example
///
/// ```rust
/// use semkit_providers::chat::NullChatCompletionProvider;
/// use semkit_domain::ports::providers::ChatCompletionProvider;
///
/// let provider = NullChatCompletionProvider::new();
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullChatCompletionProvider {
    max_context_tokens: usize,
}

impl NullChatCompletionProvider {
    /// Create a new null chat completion provider
    pub fn new() -> Self {
        Self::with_max_context_tokens(CHAT_MODEL_DEFAULT_CONTEXT_TOKENS)
    }

    /// Create a null provider reporting the given context window
    pub fn with_max_context_tokens(max_context_tokens: usize) -> Self {
        Self { max_context_tokens }
    }
}

impl Default for NullChatCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatCompletionProvider for NullChatCompletionProvider {
    async fn complete(
        &self,
        history: &ChatHistory,
        _settings: &ChatRequestSettings,
    ) -> Result<ChatCompletion> {
        let quoted = history
            .last_user_message()
            .and_then(|message| message.content.lines().last())
            .unwrap_or_default();

        Ok(ChatCompletion {
            content: format!("{NULL_CHAT_REPLY_PREFIX}{quoted}"),
            model: NULL_CHAT_MODEL.to_string(),
            prompt_tokens: None,
            completion_tokens: None,
        })
    }

    fn model(&self) -> &str {
        NULL_CHAT_MODEL
    }

    fn max_context_tokens(&self) -> usize {
        self.max_context_tokens
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_factory(
    config: &ChatCompletionProviderConfig,
) -> std::result::Result<Arc<dyn ChatCompletionProvider>, String> {
    Ok(Arc::new(NullChatCompletionProvider::with_max_context_tokens(
        config
            .max_context_tokens
            .unwrap_or(CHAT_MODEL_DEFAULT_CONTEXT_TOKENS),
    )))
}

#[linkme::distributed_slice(CHAT_COMPLETION_PROVIDERS)]
static NULL_PROVIDER: ChatCompletionProviderEntry = ChatCompletionProviderEntry {
    name: "null",
    description: "Null provider for testing (echoes the last user line, offline)",
    factory: null_factory,
};
