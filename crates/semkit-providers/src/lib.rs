//! # semkit - Provider Implementations
//!
//! User-selectable clients for the AI services the application layer talks
//! to. Each provider implements a port defined in `semkit-domain` and
//! registers a factory in one of the linkme registries declared by
//! `semkit-application`, so the composition root can pick it by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Azure OpenAI, Ollama, Null |
//! | Chat completion | `ChatCompletionProvider` | OpenAI, Azure OpenAI, Null |
//!
//! ## Usage
//!
//! ```ignore
//! use semkit_providers::embedding::AzureOpenAIEmbeddingProvider;
//! use semkit_providers::chat::OpenAIChatCompletionProvider;
//! ```
//!
//! Binaries that only resolve providers through the registries still have to
//! link this crate, e.g. with `extern crate semkit_providers;`.

pub use semkit_domain::error::{Error, Result};
pub use semkit_domain::ports::providers::{ChatCompletionProvider, EmbeddingProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for the supported embedding APIs.
pub mod embedding;

/// Chat completion provider implementations
///
/// Implements `ChatCompletionProvider` for the supported chat APIs.
pub mod chat;
