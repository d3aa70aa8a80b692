//! Domain Services
//!
//! Pure functions the use cases are built from.

/// Cosine similarity over embedding vectors
pub mod similarity;
/// Text length measures used to budget prompts
pub mod text_length;

pub use similarity::cosine_similarity;
pub use text_length::{
    LengthFunction, LengthFunctionKind, length_by_character_count, length_by_token_count,
};
