//! Text length measures
//!
//! Prompt budgets are computed with a pluggable length function so callers
//! can trade precision for speed.

use semkit_domain::constants::CHARS_PER_TOKEN;
use serde::{Deserialize, Serialize};

/// Measures the length of a piece of text in some unit
pub type LengthFunction = fn(&str) -> usize;

/// Length in Unicode scalar values
pub fn length_by_character_count(text: &str) -> usize {
    text.chars().count()
}

/// Approximate length in model tokens (~4 characters per token, rounded up)
pub fn length_by_token_count(text: &str) -> usize {
    length_by_character_count(text).div_ceil(CHARS_PER_TOKEN)
}

/// Named length function, as selected in configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LengthFunctionKind {
    /// [`length_by_character_count`]
    CharacterCount,
    /// [`length_by_token_count`]
    #[default]
    TokenCount,
}

impl LengthFunctionKind {
    /// The function this kind names
    pub fn function(self) -> LengthFunction {
        match self {
            Self::CharacterCount => length_by_character_count,
            Self::TokenCount => length_by_token_count,
        }
    }
}
