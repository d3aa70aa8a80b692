//! Application Layer - semkit
//!
//! Use cases built on top of the domain ports. Nothing here knows which AI
//! service is on the other end of a port; the composition root in
//! `semkit-infrastructure` decides that from configuration.
//!
//! ## Use Cases
//!
//! - Cosine similarity between two texts ([`use_cases::CosineStringSimilarityComparer`])
//! - Question answering from a supplied context ([`use_cases::QuestionAnsweringService`])
//!
//! ## Kernel
//!
//! [`kernel::Kernel`] bundles the chat completion and embedding services the
//! use cases are built from.
//!
//! ## Ports (Interfaces)
//!
//! - `ports::services::*`: Use case interfaces
//! - `ports::registry::*`: linkme registries providers submit themselves to

pub mod domain_services;
pub mod kernel;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use kernel::{Kernel, KernelBuilder};
pub use ports::*;
pub use use_cases::*;
