//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text in a semantic space |
//! | [`ChatHistory`] | Ordered conversation sent to a chat model |
//! | [`ChatRequestSettings`] | Sampling and length settings for a completion |
//! | [`ChatCompletion`] | Text produced by a chat model |

/// Chat completion value objects
pub mod chat;
/// Semantic embedding value objects
pub mod embedding;

pub use chat::{ChatCompletion, ChatHistory, ChatMessage, ChatRequestSettings, ChatRole};
pub use embedding::Embedding;
