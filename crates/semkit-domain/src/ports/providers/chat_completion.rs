use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ChatCompletion, ChatHistory, ChatRequestSettings};

/// Chat Completion Interface
///
/// Contract for services that continue a conversation with a language
/// model. The prompt engineering lives with the caller; providers only move
/// the history over the wire and bring the reply back.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Generate the next assistant message for `history`
    async fn complete(
        &self,
        history: &ChatHistory,
        settings: &ChatRequestSettings,
    ) -> Result<ChatCompletion>;

    /// Model (or deployment) name requests are sent to
    fn model(&self) -> &str;

    /// Size of the model's context window, in tokens
    fn max_context_tokens(&self) -> usize;

    /// Name of this provider implementation (e.g., "openai", "azure-openai")
    fn provider_name(&self) -> &str;
}
