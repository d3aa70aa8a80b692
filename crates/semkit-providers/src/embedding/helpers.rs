//! Common helpers for embedding providers
//!
//! Response parsing shared by the OpenAI-compatible providers.

use semkit_domain::error::{Error, Result};
use semkit_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL,
};

/// Known output size of an OpenAI embedding model
pub fn openai_model_dimensions(model: &str) -> usize {
    match model {
        "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
        "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
        _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
    }
}

/// Parse an OpenAI-style `{"data": [{"index": n, "embedding": [...]}]}` body
///
/// Items are returned in request order, using `index` when the service
/// provides it.
pub fn parse_openai_embeddings(
    response_data: &serde_json::Value,
    expected: usize,
    model: &str,
) -> Result<Vec<Embedding>> {
    let data = response_data["data"]
        .as_array()
        .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?;

    if data.len() != expected {
        return Err(Error::embedding(format!(
            "Response data count mismatch: expected {expected}, got {}",
            data.len()
        )));
    }

    let mut items: Vec<(usize, &serde_json::Value)> = data
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let index = item["index"]
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .unwrap_or(position);
            (index, item)
        })
        .collect();
    items.sort_by_key(|(index, _)| *index);

    items
        .into_iter()
        .map(|(index, item)| {
            let vector = parse_vector(&item["embedding"]).ok_or_else(|| {
                Error::embedding(format!("Invalid embedding format for text {index}"))
            })?;
            Ok(Embedding::new(vector, model))
        })
        .collect()
}

/// Parse a JSON array of numbers into an `f32` vector
///
/// Values that overflow `f32` are rejected rather than turned into infinity.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_vector(value: &serde_json::Value) -> Option<Vec<f32>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_f64().map(|f| f as f32).filter(|f| f.is_finite()))
        .collect()
}
