//! Question Answering Use Case
//!
//! Answers a question using only the text supplied as context. The context
//! is trimmed so the prompt plus the answer fit in the model's context
//! window, measured with the configured [`LengthFunction`].

use std::sync::Arc;

use async_trait::async_trait;
use semkit_domain::constants::{
    QUESTION_ANSWERING_MAX_RESPONSE_TOKENS, QUESTION_ANSWERING_TEMPERATURE,
    QUESTION_ANSWERING_UNKNOWN_ANSWER,
};
use semkit_domain::error::{Error, Result};
use semkit_domain::ports::providers::ChatCompletionProvider;
use semkit_domain::value_objects::{ChatHistory, ChatRequestSettings};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain_services::{LengthFunction, length_by_token_count};
use crate::kernel::Kernel;
use crate::ports::services::QuestionAnsweringInterface;

/// Tuning for [`QuestionAnsweringService`]
#[derive(Debug, Clone, Copy)]
pub struct QuestionAnsweringOptions {
    /// Upper bound on tokens generated for the answer
    pub max_response_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// How prompt and context length is measured
    pub length_function: LengthFunction,
}

impl Default for QuestionAnsweringOptions {
    fn default() -> Self {
        Self {
            max_response_tokens: QUESTION_ANSWERING_MAX_RESPONSE_TOKENS,
            temperature: QUESTION_ANSWERING_TEMPERATURE,
            length_function: length_by_token_count,
        }
    }
}

/// [`QuestionAnsweringInterface`] backed by a chat completion service
pub struct QuestionAnsweringService {
    chat_completion: Arc<dyn ChatCompletionProvider>,
    options: QuestionAnsweringOptions,
}

impl QuestionAnsweringService {
    /// Create a service with the given chat completion provider
    pub fn new(
        chat_completion: Arc<dyn ChatCompletionProvider>,
        options: QuestionAnsweringOptions,
    ) -> Self {
        Self {
            chat_completion,
            options,
        }
    }

    /// Create a service from the kernel's chat completion service
    pub fn from_kernel(kernel: &Kernel, options: QuestionAnsweringOptions) -> Result<Self> {
        Ok(Self::new(kernel.chat_completion_provider()?, options))
    }

    /// Options in effect
    pub fn options(&self) -> &QuestionAnsweringOptions {
        &self.options
    }

    /// Room left for the context once instructions and the answer are reserved
    fn context_budget(&self, question: &str) -> Result<usize> {
        let length = self.options.length_function;
        let scaffolding = length(system_prompt().as_str()) + length(&user_prompt("", question));
        let reserved = scaffolding + self.options.max_response_tokens as usize;
        let window = self.chat_completion.max_context_tokens();

        match window.checked_sub(reserved) {
            Some(budget) if budget > 0 => Ok(budget),
            _ => Err(Error::invalid_argument(format!(
                "Question and response reserve {reserved} of {window} available tokens, leaving no room for context"
            ))),
        }
    }
}

#[async_trait]
impl QuestionAnsweringInterface for QuestionAnsweringService {
    async fn answer_from_context(
        &self,
        question: &str,
        context: &str,
        cancellation: &CancellationToken,
    ) -> Result<String> {
        if question.trim().is_empty() {
            return Err(Error::invalid_argument("Question cannot be empty"));
        }
        if cancellation.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let budget = self.context_budget(question)?;
        let trimmed = trim_to_length(context, budget, self.options.length_function);
        if trimmed.len() < context.len() {
            warn!(
                budget,
                original_bytes = context.len(),
                kept_bytes = trimmed.len(),
                "Context exceeds the model window and was trimmed"
            );
        }

        let mut history = ChatHistory::with_system_message(system_prompt());
        history.add_user_message(user_prompt(trimmed, question));

        let settings = ChatRequestSettings::default()
            .with_max_tokens(self.options.max_response_tokens)
            .with_temperature(self.options.temperature);

        let completion = tokio::select! {
            biased;
            () = cancellation.cancelled() => return Err(Error::Cancelled),
            result = self.chat_completion.complete(&history, &settings) => result?,
        };

        debug!(
            provider = self.chat_completion.provider_name(),
            model = %completion.model,
            completion_tokens = ?completion.completion_tokens,
            "Answered question from context"
        );
        Ok(completion.content.trim().to_string())
    }
}

fn system_prompt() -> String {
    format!(
        "You are an assistant that answers questions using only the information in the CONTEXT section. \
         If the context does not contain the answer, reply exactly with \"{QUESTION_ANSWERING_UNKNOWN_ANSWER}\". \
         Do not make up facts. Answer in the same language as the question."
    )
}

fn user_prompt(context: &str, question: &str) -> String {
    format!("CONTEXT:\n{context}\n\nQUESTION:\n{question}")
}

/// Longest prefix of `text` (on a char boundary) whose length fits in `limit`
///
/// Assumes `length` grows monotonically with the prefix.
pub fn trim_to_length(text: &str, limit: usize, length: LengthFunction) -> &str {
    if length(text) <= limit {
        return text;
    }

    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    // boundaries[lo] always fits; boundaries[hi] never does.
    let (mut lo, mut hi) = (0, boundaries.len() - 1);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if length(&text[..boundaries[mid]]) <= limit {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    &text[..boundaries[lo]]
}
