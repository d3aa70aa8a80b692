//! Tests for the Ollama embedding provider against a mock server

use std::time::Duration;

use reqwest::Client;
use semkit_domain::ports::providers::EmbeddingProvider;
use semkit_providers::embedding::OllamaEmbeddingProvider;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_one_request_per_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .and(body_partial_json(json!({"model": "all-minilm"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": [0.5, 0.5]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let provider = OllamaEmbeddingProvider::new(
        &server.uri(),
        "all-minilm".to_string(),
        Duration::from_secs(5),
        Client::new(),
    );
    let embeddings = provider
        .embed_batch(&["a".to_string(), "b".to_string()])
        .await
        .expect("embeddings");

    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].vector, vec![0.5, 0.5]);
    assert_eq!(provider.dimensions(), 384);
}

#[tokio::test]
async fn test_missing_embedding_field_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "no model"})))
        .mount(&server)
        .await;

    let provider = OllamaEmbeddingProvider::new(
        &server.uri(),
        "nomic-embed-text".to_string(),
        Duration::from_secs(5),
        Client::new(),
    );
    let err = provider.embed("a").await.expect_err("missing field");
    assert!(err.to_string().contains("missing embedding array"), "{err}");
}
