//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the external AI services it
//! relies on. Implementations live in `semkit-providers`.

/// External service provider ports
pub mod providers;

pub use providers::{ChatCompletionProvider, EmbeddingProvider};
