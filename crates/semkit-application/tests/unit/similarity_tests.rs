//! Tests for the cosine similarity math

use semkit_application::domain_services::cosine_similarity;
use semkit_domain::Error;

const EPSILON: f64 = 1e-9;

#[test]
fn test_identical_vectors_score_one() {
    let v = [0.3, -1.2, 4.5, 0.0, 2.0];
    let score = cosine_similarity(&v, &v).expect("similarity");
    assert!((score - 1.0).abs() < EPSILON, "got {score}");
}

#[test]
fn test_orthogonal_vectors_score_zero() {
    let score = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).expect("similarity");
    assert!(score.abs() < EPSILON, "got {score}");
}

#[test]
fn test_opposite_vectors_score_minus_one() {
    let score = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).expect("similarity");
    assert!((score + 1.0).abs() < EPSILON, "got {score}");
}

#[test]
fn test_symmetric() {
    let a = [0.1, 0.7, -0.2];
    let b = [0.9, -0.3, 0.4];
    let ab = cosine_similarity(&a, &b).expect("similarity");
    let ba = cosine_similarity(&b, &a).expect("similarity");
    assert!((ab - ba).abs() < EPSILON);
}

#[test]
fn test_bounded() {
    let a = [3.0, -7.5, 0.25, 11.0];
    let b = [-2.0, 1.5, 9.0, 0.5];
    let score = cosine_similarity(&a, &b).expect("similarity");
    assert!((-1.0 - EPSILON..=1.0 + EPSILON).contains(&score));
}

#[test]
fn test_length_mismatch() {
    let result = cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]);
    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            first: 3,
            second: 2
        })
    ));
}

#[test]
fn test_length_mismatch_message() {
    let err = cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]).expect_err("mismatch");
    assert_eq!(err.to_string(), "Vector size should be the same: 3 != 2");
}

#[test]
fn test_zero_vector_is_rejected() {
    assert!(matches!(
        cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]),
        Err(Error::ZeroMagnitudeVector)
    ));
    assert!(matches!(
        cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]),
        Err(Error::ZeroMagnitudeVector)
    ));
}
