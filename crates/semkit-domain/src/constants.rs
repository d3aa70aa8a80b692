//! Domain layer constants
//!
//! Defaults that belong to the domain itself and are shared by the
//! application layer. Provider- and infrastructure-specific values live in
//! their own crates.

// ============================================================================
// QUESTION ANSWERING CONSTANTS
// ============================================================================

/// Reply the model is instructed to give when the context has no answer
pub const QUESTION_ANSWERING_UNKNOWN_ANSWER: &str = "I don't know";

/// Default upper bound on tokens generated for an answer
pub const QUESTION_ANSWERING_MAX_RESPONSE_TOKENS: u32 = 1000;

/// Default sampling temperature for question answering
pub const QUESTION_ANSWERING_TEMPERATURE: f32 = 0.0;

// ============================================================================
// TEXT LENGTH CONSTANTS
// ============================================================================

/// Approximate number of characters per token for English text
pub const CHARS_PER_TOKEN: usize = 4;

// ============================================================================
// CHAT MODEL CONSTANTS
// ============================================================================

/// Context window assumed for chat models that are not recognized
pub const CHAT_MODEL_DEFAULT_CONTEXT_TOKENS: usize = 4096;
