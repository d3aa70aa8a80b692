//! Configuration types module

pub mod app;
pub mod logging;
pub mod question_answering;
pub mod semantic_kernel;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use question_answering::QuestionAnsweringConfig;
pub use semantic_kernel::SemanticKernelConfig;
