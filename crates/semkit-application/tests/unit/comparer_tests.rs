//! Tests for `CosineStringSimilarityComparer`

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use semkit_application::Kernel;
use semkit_application::ports::services::StringSimilarityComparer;
use semkit_application::use_cases::CosineStringSimilarityComparer;
use semkit_domain::Error;
use tokio_util::sync::CancellationToken;

use crate::test_utils::{
    FailingEmbeddingProvider, ScriptedEmbeddingProvider, SlowEmbeddingProvider,
};

const EPSILON: f64 = 1e-9;

fn scripted() -> Arc<ScriptedEmbeddingProvider> {
    Arc::new(ScriptedEmbeddingProvider::new(&[
        ("cat", vec![1.0, 0.0, 0.0]),
        ("kitten", vec![0.9, 0.1, 0.0]),
        ("spreadsheet", vec![0.0, 1.0, 0.0]),
        ("dog", vec![-1.0, 0.0, 0.0]),
        ("short", vec![1.0, 0.0]),
        ("nothing", vec![0.0, 0.0, 0.0]),
        ("overflowed", vec![f32::INFINITY, 0.0, 0.0]),
    ]))
}

#[tokio::test]
async fn test_same_text_scores_one() {
    let provider = scripted();
    let comparer = CosineStringSimilarityComparer::new(provider.clone());

    let score = comparer
        .compare("cat", "cat", &CancellationToken::new())
        .await
        .expect("compare");

    assert!((score - 1.0).abs() < EPSILON);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unrelated_texts_score_zero() {
    let comparer = CosineStringSimilarityComparer::new(scripted());
    let score = comparer
        .compare("cat", "spreadsheet", &CancellationToken::new())
        .await
        .expect("compare");
    assert!(score.abs() < EPSILON);
}

#[tokio::test]
async fn test_opposite_texts_score_minus_one() {
    let comparer = CosineStringSimilarityComparer::new(scripted());
    let score = comparer
        .compare("cat", "dog", &CancellationToken::new())
        .await
        .expect("compare");
    assert!((score + 1.0).abs() < EPSILON);
}

#[tokio::test]
async fn test_related_texts_rank_above_unrelated() {
    let comparer = CosineStringSimilarityComparer::new(scripted());
    let token = CancellationToken::new();
    let related = comparer.compare("cat", "kitten", &token).await.expect("compare");
    let unrelated = comparer
        .compare("cat", "spreadsheet", &token)
        .await
        .expect("compare");
    assert!(related > unrelated);
}

#[tokio::test]
async fn test_dimension_mismatch_is_reported() {
    let comparer = CosineStringSimilarityComparer::new(scripted());
    let result = comparer
        .compare("cat", "short", &CancellationToken::new())
        .await;
    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            first: 3,
            second: 2
        })
    ));
}

#[tokio::test]
async fn test_zero_magnitude_embedding_is_reported() {
    let comparer = CosineStringSimilarityComparer::new(scripted());
    let result = comparer
        .compare("nothing", "cat", &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(Error::ZeroMagnitudeVector)));
}

#[tokio::test]
async fn test_non_finite_embedding_is_rejected() {
    let comparer = CosineStringSimilarityComparer::new(scripted());
    let result = comparer
        .compare("overflowed", "overflowed", &CancellationToken::new())
        .await;
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_upstream_error_is_passed_through() {
    let comparer = CosineStringSimilarityComparer::new(Arc::new(FailingEmbeddingProvider));
    let err = comparer
        .compare("a", "b", &CancellationToken::new())
        .await
        .expect_err("upstream failure");
    match err {
        Error::Embedding { message } => assert!(message.contains("503")),
        other => panic!("expected embedding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_before_start_does_no_work() {
    let provider = scripted();
    let comparer = CosineStringSimilarityComparer::new(provider.clone());
    let token = CancellationToken::new();
    token.cancel();

    let result = comparer.compare("cat", "kitten", &token).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_while_embedding_aborts_requests() {
    let provider = Arc::new(SlowEmbeddingProvider::new(Duration::from_secs(60)));
    let comparer = CosineStringSimilarityComparer::new(provider.clone());
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.cancel();
    });

    let result = comparer.compare("first", "second", &token).await;
    assert!(matches!(result, Err(Error::Cancelled)));

    // Give any leaked request time to finish; none should.
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(provider.started.load(Ordering::SeqCst), 2);
    assert_eq!(provider.finished.load(Ordering::SeqCst), 0);
}

#[test]
fn test_from_kernel_requires_embedding_service() {
    let kernel = Kernel::default();
    assert!(matches!(
        CosineStringSimilarityComparer::from_kernel(&kernel),
        Err(Error::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_from_kernel_uses_kernel_embedding_service() {
    let kernel = Kernel::builder().with_embedding_provider(scripted()).build();
    let comparer = CosineStringSimilarityComparer::from_kernel(&kernel).expect("comparer");
    let score = comparer
        .compare("kitten", "kitten", &CancellationToken::new())
        .await
        .expect("compare");
    assert!((score - 1.0).abs() < EPSILON);
}
