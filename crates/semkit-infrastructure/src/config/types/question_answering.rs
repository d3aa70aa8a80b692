//! Question answering configuration types

use semkit_application::domain_services::LengthFunctionKind;
use semkit_application::use_cases::QuestionAnsweringOptions;
use semkit_domain::constants::{
    QUESTION_ANSWERING_MAX_RESPONSE_TOKENS, QUESTION_ANSWERING_TEMPERATURE,
};
use serde::{Deserialize, Serialize};

/// Question answering configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuestionAnsweringConfig {
    /// How prompt and context length is measured
    pub length_function: LengthFunctionKind,
    /// Upper bound on tokens generated for an answer
    pub max_response_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for QuestionAnsweringConfig {
    fn default() -> Self {
        Self {
            length_function: LengthFunctionKind::default(),
            max_response_tokens: QUESTION_ANSWERING_MAX_RESPONSE_TOKENS,
            temperature: QUESTION_ANSWERING_TEMPERATURE,
        }
    }
}

impl QuestionAnsweringConfig {
    /// Options for the question answering service
    pub fn to_options(&self) -> QuestionAnsweringOptions {
        QuestionAnsweringOptions {
            max_response_tokens: self.max_response_tokens,
            temperature: self.temperature,
            length_function: self.length_function.function(),
        }
    }
}
