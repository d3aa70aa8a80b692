//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, QuestionAnsweringConfig, SemanticKernelConfig};

/// Root of the configuration tree
///
/// Every section falls back to its defaults when missing from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// AI service selection and credentials
    pub semantic_kernel: SemanticKernelConfig,
    /// Question answering tuning
    pub question_answering: QuestionAnsweringConfig,
}
