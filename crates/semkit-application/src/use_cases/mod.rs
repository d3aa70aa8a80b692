//! Use Case Implementations
//!
//! Application services implementing the interfaces in `ports::services`.

pub mod question_answering;
pub mod similarity_service;

pub use question_answering::{QuestionAnsweringOptions, QuestionAnsweringService};
pub use similarity_service::CosineStringSimilarityComparer;
