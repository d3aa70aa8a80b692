//! Tests for the Azure OpenAI providers against a mock server

use std::time::Duration;

use reqwest::Client;
use semkit_domain::ports::providers::{ChatCompletionProvider, EmbeddingProvider};
use semkit_domain::{ChatHistory, ChatRequestSettings, Error};
use semkit_providers::chat::{AzureOpenAIChatCompletionProvider, AzureOpenAIChatSettings};
use semkit_providers::embedding::AzureOpenAIEmbeddingProvider;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_VERSION: &str = "2024-02-01";

fn chat_provider(server: &MockServer) -> AzureOpenAIChatCompletionProvider {
    AzureOpenAIChatCompletionProvider::new(
        AzureOpenAIChatSettings {
            endpoint: format!("{}/", server.uri()),
            deployment: "chat".to_string(),
            api_version: API_VERSION.to_string(),
            api_key: "azure-key".to_string(),
            model: "gpt-35-turbo".to_string(),
            max_context_tokens: None,
            timeout: Duration::from_secs(5),
        },
        Client::new(),
    )
}

#[tokio::test]
async fn test_embedding_uses_deployment_url_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/embeddings/embeddings"))
        .and(query_param("api-version", API_VERSION))
        .and(header("api-key", "azure-key"))
        .and(body_partial_json(json!({"input": ["hello"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"index": 0, "embedding": [1.0, 0.0, 0.5]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = AzureOpenAIEmbeddingProvider::new(
        &server.uri(),
        "embeddings".to_string(),
        API_VERSION.to_string(),
        "azure-key",
        "text-embedding-ada-002".to_string(),
        Duration::from_secs(5),
        Client::new(),
    );

    let embedding = provider.embed("hello").await.expect("embedding");
    assert_eq!(embedding.vector, vec![1.0, 0.0, 0.5]);
    assert_eq!(embedding.model, "text-embedding-ada-002");
    assert_eq!(provider.dimensions(), 1536);
    assert_eq!(provider.provider_name(), "azure-openai");
}

#[tokio::test]
async fn test_chat_completion_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/chat/chat/completions"))
        .and(query_param("api-version", API_VERSION))
        .and(header("api-key", "azure-key"))
        .and(body_partial_json(json!({
            "max_tokens": 100,
            "messages": [
                {"role": "system", "content": "answer briefly"},
                {"role": "user", "content": "capital of France?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-35-turbo",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Paris"}}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = ChatHistory::with_system_message("answer briefly");
    history.add_user_message("capital of France?");
    let settings = ChatRequestSettings::default().with_max_tokens(100);

    let provider = chat_provider(&server);
    let completion = provider
        .complete(&history, &settings)
        .await
        .expect("completion");

    assert_eq!(completion.content, "Paris");
    assert_eq!(completion.completion_tokens, Some(1));
    assert_eq!(provider.max_context_tokens(), 4096);
}

#[tokio::test]
async fn test_chat_rate_limit_maps_to_chat_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = chat_provider(&server)
        .complete(&ChatHistory::new(), &ChatRequestSettings::default())
        .await
        .expect_err("429");

    match err {
        Error::ChatCompletion { message } => {
            assert!(message.contains("rate limit exceeded"), "{message}");
        }
        other => panic!("expected chat completion error, got {other:?}"),
    }
}

#[test]
fn test_chat_url_layout() {
    let provider = AzureOpenAIChatCompletionProvider::new(
        AzureOpenAIChatSettings {
            endpoint: "https://res.openai.azure.com/".to_string(),
            deployment: "gpt".to_string(),
            api_version: API_VERSION.to_string(),
            api_key: "k".to_string(),
            model: "gpt-4o".to_string(),
            max_context_tokens: Some(8000),
            timeout: Duration::from_secs(1),
        },
        Client::new(),
    );
    assert_eq!(
        provider.chat_completions_url().expect("url").as_str(),
        "https://res.openai.azure.com/openai/deployments/gpt/chat/completions?api-version=2024-02-01"
    );
    assert_eq!(provider.max_context_tokens(), 8000);
}

#[tokio::test]
async fn test_deployment_name_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/team%2Fembed%20v2/embeddings"))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"index": 0, "embedding": [0.5, 0.5]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = AzureOpenAIEmbeddingProvider::new(
        &server.uri(),
        "team/embed v2".to_string(),
        API_VERSION.to_string(),
        "azure-key",
        "text-embedding-3-small".to_string(),
        Duration::from_secs(5),
        Client::new(),
    );

    let embedding = provider.embed("hello").await.expect("embedding");
    assert_eq!(embedding.vector, vec![0.5, 0.5]);
}

#[test]
fn test_chat_url_encodes_reserved_characters() {
    let provider = AzureOpenAIChatCompletionProvider::new(
        AzureOpenAIChatSettings {
            endpoint: "https://res.openai.azure.com".to_string(),
            deployment: "gpt?4#o".to_string(),
            api_version: API_VERSION.to_string(),
            api_key: "k".to_string(),
            model: "gpt-4o".to_string(),
            max_context_tokens: None,
            timeout: Duration::from_secs(1),
        },
        Client::new(),
    );
    let url = provider.chat_completions_url().expect("url");
    assert_eq!(url.path(), "/openai/deployments/gpt%3F4%23o/chat/completions");
    assert_eq!(url.query(), Some("api-version=2024-02-01"));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let provider = AzureOpenAIEmbeddingProvider::new(
        "not a url",
        "embeddings".to_string(),
        API_VERSION.to_string(),
        "azure-key",
        "text-embedding-ada-002".to_string(),
        Duration::from_secs(1),
        Client::new(),
    );
    assert!(matches!(
        provider.embeddings_url(),
        Err(Error::Embedding { .. })
    ));
}
