//! # semkit
//!
//! Embedding-based text similarity and question answering over configurable
//! AI services.
//!
//! This crate is the public facade: it re-exports the layer crates and hosts
//! the `semkit` command line interface.
//!
//! ## Example
//!
//! ```ignore
//! use semkit::infrastructure::{ConfigLoader, init_app};
//! use tokio_util::sync::CancellationToken;
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let score = context
//!     .similarity_comparer()
//!     .compare("a cat sat on the mat", "a kitten rested on the rug", &CancellationToken::new())
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, value objects and provider ports
//! - `application` - Cosine similarity, question answering and the kernel
//! - `providers` - Null, OpenAI, Azure OpenAI and Ollama clients
//! - `infrastructure` - Configuration, logging and the composition root

pub mod cli;
pub mod commands;

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use semkit_domain::*;
}

/// Application layer - use cases and the kernel
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use semkit_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use semkit_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use semkit_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::{Error, Result};

// Re-export main entry point at the crate root
pub use commands::run;
