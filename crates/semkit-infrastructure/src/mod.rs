//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/JSON/env configuration via Figment |
//! | [`di`] | Provider resolution and the [`di::AppContext`] composition root |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions converting foreign errors |

// Providers register themselves through linkme; keep them linked.
extern crate semkit_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
