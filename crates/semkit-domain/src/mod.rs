//! # semkit Domain Layer
//!
//! Core types shared by every other crate in the workspace. Nothing in here
//! talks to the network or reads configuration; it only describes what an
//! embedding is, what a chat exchange looks like, what can go wrong, and the
//! contracts (ports) that external AI services must satisfy.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Embeddings and chat value objects |
//! | [`ports`] | Provider traits implemented by `semkit-providers` |
//! | [`constants`] | Domain-level defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    ChatCompletion, ChatHistory, ChatMessage, ChatRequestSettings, ChatRole, Embedding,
};
