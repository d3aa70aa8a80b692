//! Tests for `QuestionAnsweringService`

use std::sync::Arc;
use std::time::Duration;

use semkit_application::Kernel;
use semkit_application::domain_services::{length_by_character_count, length_by_token_count};
use semkit_application::ports::services::QuestionAnsweringInterface;
use semkit_application::use_cases::{QuestionAnsweringOptions, QuestionAnsweringService};
use semkit_domain::{ChatRole, Error};
use tokio_util::sync::CancellationToken;

use crate::test_utils::RecordingChatProvider;

const CONTEXT: &str = "The Eiffel Tower was completed in 1889 and is 330 metres tall.";

#[tokio::test]
async fn test_answer_uses_context_and_question() {
    let chat = Arc::new(RecordingChatProvider::new("  1889\n", 4096));
    let service = QuestionAnsweringService::new(chat.clone(), QuestionAnsweringOptions::default());

    let answer = service
        .answer_from_context(
            "When was the Eiffel Tower completed?",
            CONTEXT,
            &CancellationToken::new(),
        )
        .await
        .expect("answer");

    assert_eq!(answer, "1889");
    let (history, settings) = chat.last_request();
    let messages = history.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, ChatRole::System);
    assert!(messages[0].content.contains("I don't know"));
    assert_eq!(messages[1].role, ChatRole::User);
    assert!(messages[1].content.contains(CONTEXT));
    assert!(
        messages[1]
            .content
            .ends_with("QUESTION:\nWhen was the Eiffel Tower completed?")
    );
    assert_eq!(settings.max_tokens, Some(1000));
    assert!(settings.temperature.abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_options_are_forwarded() {
    let chat = Arc::new(RecordingChatProvider::new("ok", 4096));
    let options = QuestionAnsweringOptions {
        max_response_tokens: 64,
        temperature: 0.7,
        length_function: length_by_character_count,
    };
    let service = QuestionAnsweringService::new(chat.clone(), options);

    service
        .answer_from_context("How tall?", CONTEXT, &CancellationToken::new())
        .await
        .expect("answer");

    let (_, settings) = chat.last_request();
    assert_eq!(settings.max_tokens, Some(64));
    assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(service.options().max_response_tokens, 64);
}

#[tokio::test]
async fn test_oversized_context_is_trimmed_to_fit() {
    let window = 2048;
    let chat = Arc::new(RecordingChatProvider::new("ok", window));
    let service = QuestionAnsweringService::new(chat.clone(), QuestionAnsweringOptions::default());
    let context = "lorem ipsum dolor sit amet ".repeat(2_000);

    service
        .answer_from_context("What is this?", &context, &CancellationToken::new())
        .await
        .expect("answer");

    let (history, settings) = chat.last_request();
    let prompt_tokens: usize = history
        .messages()
        .iter()
        .map(|m| length_by_token_count(&m.content))
        .sum();
    let response_tokens = settings.max_tokens.expect("max tokens") as usize;
    assert!(prompt_tokens + response_tokens <= window);

    let user = &history.messages()[1].content;
    let kept = user
        .strip_prefix("CONTEXT:\n")
        .and_then(|rest| rest.split("\n\nQUESTION:\n").next())
        .expect("prompt layout");
    assert!(!kept.is_empty());
    assert!(kept.len() < context.len());
    assert!(context.starts_with(kept));
}

#[tokio::test]
async fn test_empty_question_is_rejected() {
    let chat = Arc::new(RecordingChatProvider::new("ok", 4096));
    let service = QuestionAnsweringService::new(chat.clone(), QuestionAnsweringOptions::default());

    let result = service
        .answer_from_context("   ", CONTEXT, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert_eq!(chat.request_count(), 0);
}

#[tokio::test]
async fn test_window_too_small_is_rejected() {
    let chat = Arc::new(RecordingChatProvider::new("ok", 512));
    let service = QuestionAnsweringService::new(chat.clone(), QuestionAnsweringOptions::default());

    let result = service
        .answer_from_context("Anything?", CONTEXT, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert_eq!(chat.request_count(), 0);
}

#[tokio::test]
async fn test_cancelled_before_start_sends_nothing() {
    let chat = Arc::new(RecordingChatProvider::new("ok", 4096));
    let service = QuestionAnsweringService::new(chat.clone(), QuestionAnsweringOptions::default());
    let token = CancellationToken::new();
    token.cancel();

    let result = service.answer_from_context("Q?", CONTEXT, &token).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(chat.request_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_while_waiting_for_completion() {
    let chat = Arc::new(RecordingChatProvider::new("late", 4096).with_delay(Duration::from_secs(60)));
    let service = QuestionAnsweringService::new(chat.clone(), QuestionAnsweringOptions::default());
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.cancel();
    });

    let result = service.answer_from_context("Q?", CONTEXT, &token).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(chat.request_count(), 1);
}

#[test]
fn test_from_kernel_requires_chat_service() {
    assert!(matches!(
        QuestionAnsweringService::from_kernel(&Kernel::default(), QuestionAnsweringOptions::default()),
        Err(Error::NotFound { .. })
    ));
}
