//! Tests for the offline null providers

use semkit_domain::ports::providers::{ChatCompletionProvider, EmbeddingProvider};
use semkit_domain::{ChatHistory, ChatRequestSettings};
use semkit_providers::chat::NullChatCompletionProvider;
use semkit_providers::embedding::NullEmbeddingProvider;

#[tokio::test]
async fn test_null_embedding_is_deterministic() {
    let provider = NullEmbeddingProvider::new();
    let first = provider.embed("hello world").await.expect("embed");
    let again = provider.embed("hello world").await.expect("embed");
    let other = provider.embed("goodbye").await.expect("embed");

    assert_eq!(first.vector, again.vector);
    assert_ne!(first.vector, other.vector);
    assert_eq!(first.dimensions, 384);
}

#[tokio::test]
async fn test_null_embedding_values_in_range() {
    let provider = NullEmbeddingProvider::with_dimensions(64);
    let embedding = provider.embed("").await.expect("embed");
    assert_eq!(embedding.vector.len(), 64);
    assert!(embedding.vector.iter().all(|v| (-1.0..1.0).contains(v)));
    assert!(embedding.vector.iter().any(|v| *v != 0.0));
}

#[tokio::test]
async fn test_null_embedding_batch_preserves_order() {
    let provider = NullEmbeddingProvider::new();
    let texts = vec!["a".to_string(), "b".to_string()];
    let batch = provider.embed_batch(&texts).await.expect("batch");
    let b = provider.embed("b").await.expect("embed");
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1].vector, b.vector);
}

#[tokio::test]
async fn test_null_embedding_health_check() {
    assert!(NullEmbeddingProvider::new().health_check().await.is_ok());
}

#[tokio::test]
async fn test_null_chat_quotes_last_user_line() {
    let provider = NullChatCompletionProvider::new();
    let mut history = ChatHistory::with_system_message("system");
    history.add_user_message("CONTEXT:\nsomething\n\nQUESTION:\nWhat is it?");

    let completion = provider
        .complete(&history, &ChatRequestSettings::default())
        .await
        .expect("complete");

    assert_eq!(completion.content, "[null] What is it?");
    assert_eq!(completion.model, "null-chat");
}

#[tokio::test]
async fn test_null_chat_without_user_message() {
    let provider = NullChatCompletionProvider::with_max_context_tokens(1024);
    let completion = provider
        .complete(&ChatHistory::new(), &ChatRequestSettings::default())
        .await
        .expect("complete");
    assert_eq!(completion.content, "[null] ");
    assert_eq!(provider.max_context_tokens(), 1024);
}
