//! Chat Completion Value Objects
//!
//! Conversation and completion types exchanged with chat completion
//! services.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions that frame the conversation
    System,
    /// Input from the end user
    User,
    /// Output from the model
    Assistant,
}

impl ChatRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Who wrote the message
    pub role: ChatRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a message with the given role
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Ordered conversation sent to a chat model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that starts with a system message
    pub fn with_system_message(content: impl Into<String>) -> Self {
        let mut history = Self::new();
        history.add_system_message(content);
        history
    }

    /// Append a system message
    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::System, content));
    }

    /// Append a user message
    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::User, content));
    }

    /// Append an assistant message
    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, content));
    }

    /// Messages in conversation order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Most recent message written by the user, if any
    pub fn last_user_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == ChatRole::User)
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Sampling and length settings for a single completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequestSettings {
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Nucleus sampling probability mass
    pub top_p: f32,
    /// Penalty for tokens already present in the text
    pub presence_penalty: f32,
    /// Penalty proportional to token frequency
    pub frequency_penalty: f32,
    /// Sequences at which generation stops
    #[serde(default)]
    pub stop_sequences: Vec<String>,
}

impl Default for ChatRequestSettings {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: 1.0,
            top_p: 1.0,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            stop_sequences: Vec::new(),
        }
    }
}

impl ChatRequestSettings {
    /// Set the maximum number of generated tokens
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Add a stop sequence
    #[must_use]
    pub fn with_stop_sequence(mut self, stop: impl Into<String>) -> Self {
        self.stop_sequences.push(stop.into());
        self
    }
}

/// Text produced by a chat model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// Generated text
    pub content: String,
    /// Model that produced the completion
    pub model: String,
    /// Tokens consumed by the prompt, when reported
    pub prompt_tokens: Option<u32>,
    /// Tokens generated, when reported
    pub completion_tokens: Option<u32>,
}
