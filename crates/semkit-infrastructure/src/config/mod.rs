//! Configuration
//!
//! Typed configuration sections and the Figment-based loader that layers
//! defaults, a TOML or JSON file, and `SEMKIT__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
