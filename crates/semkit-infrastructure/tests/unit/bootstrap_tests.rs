//! Composition root tests

use std::sync::Arc;
use std::time::Duration;

use semkit_domain::Error;
use semkit_infrastructure::config::{AppConfig, SemanticKernelConfig};
use semkit_infrastructure::di::{
    EmbeddingProviderResolver, build_kernel, chat_completion_provider_config,
    embedding_provider_config, init_app,
};
use tokio_util::sync::CancellationToken;

fn azure_kernel_config() -> SemanticKernelConfig {
    SemanticKernelConfig {
        chat_provider: "azure-openai".to_string(),
        embedding_provider: "azure-openai".to_string(),
        endpoint: Some("https://example.openai.azure.com".to_string()),
        key: Some("secret".to_string()),
        api_version: Some("2024-06-01".to_string()),
        chat_model_name: Some("gpt-35-turbo".to_string()),
        chat_model_deployment_name: Some("chat".to_string()),
        chat_max_context_tokens: Some(16_000),
        embeddings_model_name: Some("text-embedding-ada-002".to_string()),
        embeddings_model_deployment_name: Some("embeddings".to_string()),
        request_timeout_secs: 12,
    }
}

#[test]
fn test_embedding_registry_config_mapping() {
    let registry = embedding_provider_config(&azure_kernel_config());
    assert_eq!(registry.provider, "azure-openai");
    assert_eq!(registry.deployment.as_deref(), Some("embeddings"));
    assert_eq!(registry.model.as_deref(), Some("text-embedding-ada-002"));
    assert_eq!(
        registry.base_url.as_deref(),
        Some("https://example.openai.azure.com")
    );
    assert_eq!(registry.api_version.as_deref(), Some("2024-06-01"));
    assert_eq!(registry.timeout, Some(Duration::from_secs(12)));
}

#[test]
fn test_chat_registry_config_mapping() {
    let registry = chat_completion_provider_config(&azure_kernel_config());
    assert_eq!(registry.provider, "azure-openai");
    assert_eq!(registry.deployment.as_deref(), Some("chat"));
    assert_eq!(registry.api_key.as_deref(), Some("secret"));
    assert_eq!(registry.max_context_tokens, Some(16_000));
}

#[test]
fn test_azure_kernel_resolves_without_network() {
    let config = Arc::new(AppConfig {
        semantic_kernel: azure_kernel_config(),
        ..AppConfig::default()
    });

    let kernel = build_kernel(&config).expect("kernel");
    let chat = kernel.chat_completion_provider().expect("chat");
    assert_eq!(chat.provider_name(), "azure-openai");
    assert_eq!(chat.max_context_tokens(), 16_000);
    assert_eq!(
        kernel.embedding_provider().expect("embedding").provider_name(),
        "azure-openai"
    );
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let mut config = AppConfig::default();
    config.semantic_kernel.embedding_provider = "mystery".to_string();

    match init_app(config) {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.starts_with("Embedding: Unknown embedding provider"), "{message}");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_resolver_lists_registered_providers() {
    let resolver = EmbeddingProviderResolver::new(Arc::new(AppConfig::default()));
    let names: Vec<&str> = resolver.list_available().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"null"));
    assert!(names.contains(&"azure-openai"));
}

#[tokio::test]
async fn test_default_context_compares_offline() {
    let context = init_app(AppConfig::default()).expect("context");
    assert!(context.kernel().has_embedding());
    assert_eq!(context.config().semantic_kernel.embedding_provider, "null");

    let comparer = context.similarity_comparer();
    let token = CancellationToken::new();
    let same = comparer
        .compare("the same words", "the same words", &token)
        .await
        .expect("compare");
    assert!((same - 1.0).abs() < 1e-9);

    let different = comparer
        .compare("the same words", "something else", &token)
        .await
        .expect("compare");
    assert!(different < same);
}

#[tokio::test]
async fn test_default_context_answers_offline() {
    let context = init_app(AppConfig::default()).expect("context");
    let answer = context
        .question_answering()
        .answer_from_context(
            "What colour is the sky?",
            "The sky is blue.",
            &CancellationToken::new(),
        )
        .await
        .expect("answer");
    assert_eq!(answer, "[null] What colour is the sky?");
}
