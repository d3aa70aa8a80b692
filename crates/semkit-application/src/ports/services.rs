//! Application Service Interfaces
//!
//! Use case contracts handed out by the composition root.

use async_trait::async_trait;
use semkit_domain::error::Result;
use tokio_util::sync::CancellationToken;

/// Compares two strings and scores how similar they are
///
/// Scores are in [-1.0, 1.0] for cosine-based implementations, where 1.0
/// means the texts point the same way in embedding space.
#[async_trait]
pub trait StringSimilarityComparer: Send + Sync {
    /// Score the similarity of `first` and `second`
    ///
    /// Cancelling `cancellation` aborts any outstanding upstream calls and
    /// fails the operation with [`Error::Cancelled`](semkit_domain::Error::Cancelled).
    async fn compare(
        &self,
        first: &str,
        second: &str,
        cancellation: &CancellationToken,
    ) -> Result<f64>;
}

/// Answers questions using only the text supplied as context
#[async_trait]
pub trait QuestionAnsweringInterface: Send + Sync {
    /// Answer `question` from `context`
    async fn answer_from_context(
        &self,
        question: &str,
        context: &str,
        cancellation: &CancellationToken,
    ) -> Result<String>;
}
