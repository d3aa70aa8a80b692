//! Common helpers for chat completion providers
//!
//! Wire types for the OpenAI-compatible `chat/completions` operation, shared
//! by the OpenAI and Azure OpenAI providers.

use semkit_domain::constants::CHAT_MODEL_DEFAULT_CONTEXT_TOKENS;
use semkit_domain::error::{Error, Result};
use semkit_domain::value_objects::{
    ChatCompletion, ChatHistory, ChatMessage, ChatRequestSettings,
};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CHAT_CONTEXT_TOKENS_128K, CHAT_CONTEXT_TOKENS_GPT35_16K, CHAT_CONTEXT_TOKENS_GPT4,
    CHAT_CONTEXT_TOKENS_GPT4_32K,
};

/// Context window, in tokens, of a known chat model
///
/// Azure model names (`gpt-35-turbo`) are recognized alongside OpenAI's.
pub fn context_window_for_model(model: &str) -> usize {
    let model = model.to_ascii_lowercase();
    if model.starts_with("gpt-4o")
        || model.starts_with("gpt-4.1")
        || model.starts_with("gpt-4-turbo")
        || model.starts_with("o1")
        || model.starts_with("o3")
    {
        CHAT_CONTEXT_TOKENS_128K
    } else if model.starts_with("gpt-4-32k") {
        CHAT_CONTEXT_TOKENS_GPT4_32K
    } else if model.starts_with("gpt-4") {
        CHAT_CONTEXT_TOKENS_GPT4
    } else if model.contains("-16k") || model == "gpt-3.5-turbo" {
        CHAT_CONTEXT_TOKENS_GPT35_16K
    } else {
        CHAT_MODEL_DEFAULT_CONTEXT_TOKENS
    }
}

/// Request body of a chat completion call
#[derive(Debug, Serialize)]
pub struct ChatCompletionPayload<'a> {
    /// Omitted for deployment-addressed services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub temperature: f32,
    pub top_p: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<&'a [String]>,
}

impl<'a> ChatCompletionPayload<'a> {
    /// Build the body for `history` with `settings`
    pub fn new(
        model: Option<&'a str>,
        history: &'a ChatHistory,
        settings: &'a ChatRequestSettings,
    ) -> Self {
        Self {
            model,
            messages: history.messages(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            top_p: settings.top_p,
            presence_penalty: settings.presence_penalty,
            frequency_penalty: settings.frequency_penalty,
            stop: Some(settings.stop_sequences.as_slice()).filter(|stop| !stop.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

/// Parse a `chat/completions` response body into the first choice
pub fn parse_chat_completion(
    response_data: serde_json::Value,
    fallback_model: &str,
) -> Result<ChatCompletion> {
    let response: ChatCompletionResponse = serde_json::from_value(response_data)
        .map_err(|e| Error::chat_completion(format!("Invalid response format: {e}")))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| Error::chat_completion("Response contained no message content"))?;

    Ok(ChatCompletion {
        content,
        model: response
            .model
            .unwrap_or_else(|| fallback_model.to_string()),
        prompt_tokens: response.usage.as_ref().and_then(|u| u.prompt_tokens),
        completion_tokens: response.usage.as_ref().and_then(|u| u.completion_tokens),
    })
}
