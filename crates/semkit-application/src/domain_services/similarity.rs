//! Cosine similarity over embedding vectors

use semkit_domain::error::{Error, Result};

/// Cosine of the angle between `first` and `second`
///
/// Accumulates in `f64`. The result is not clamped, so rounding can push it
/// a hair outside [-1.0, 1.0].
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] when the vectors have different lengths
/// - [`Error::ZeroMagnitudeVector`] when either vector has zero magnitude
///   (this includes two empty vectors)
/// - [`Error::InvalidArgument`] when a component is NaN or infinite
///
/// # Example
///
/// ```rust
/// use semkit_application::domain_services::cosine_similarity;
///
/// let score = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
/// assert!((score + 1.0).abs() < 1e-12);
/// ```
pub fn cosine_similarity(first: &[f32], second: &[f32]) -> Result<f64> {
    if first.len() != second.len() {
        return Err(Error::dimension_mismatch(first.len(), second.len()));
    }
    if first.iter().chain(second).any(|v| !v.is_finite()) {
        return Err(Error::invalid_argument(
            "Cannot compute cosine similarity of a vector with non-finite components",
        ));
    }

    let mut dot = 0.0_f64;
    let mut first_sq = 0.0_f64;
    let mut second_sq = 0.0_f64;
    for (&a, &b) in first.iter().zip(second) {
        let (a, b) = (f64::from(a), f64::from(b));
        dot += a * b;
        first_sq += a * a;
        second_sq += b * b;
    }

    let magnitude = first_sq.sqrt() * second_sq.sqrt();
    if magnitude == 0.0 {
        return Err(Error::ZeroMagnitudeVector);
    }

    Ok(dot / magnitude)
}
