//! Provider integration tests against a local mock server: each backend is
//! exercised through the `TextGenerator` trait exactly as the facade uses it.

use std::time::Duration;

use httpmock::prelude::*;
use proposal_gen::provider::{GeminiClient, OpenAiClient, GEMINI_MODEL};
use proposal_gen::{GenerationError, TextGenerator};
use serde_json::json;

const TIMEOUT: Duration = Duration::from_secs(5);

fn gemini(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key".to_string(), TIMEOUT).with_base_url(server.base_url())
}

fn openai(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new("test-key".to_string(), TIMEOUT).with_base_url(server.base_url())
}

#[tokio::test]
async fn test_gemini_returns_candidate_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/models/{GEMINI_MODEL}:generateContent"))
            .query_param("key", "test-key")
            .json_body_partial(
                r#"{"contents": [{"role": "user", "parts": [{"text": "Draft the document."}]}]}"#,
            );
        then.status(200).json_body(json!({
            "candidates": [
                {"content": {"parts": [{"text": "POWER OF ATTORNEY\n..."}], "role": "model"}}
            ]
        }));
    });

    let text = gemini(&server).invoke("Draft the document.").await.unwrap();
    assert_eq!(text, "POWER OF ATTORNEY\n...");
    mock.assert();
}

#[tokio::test]
async fn test_gemini_non_success_status_is_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(403).body("API key not valid");
    });

    let err = gemini(&server).invoke("prompt").await.unwrap_err();
    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gemini_empty_candidates_is_empty_content() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200).json_body(json!({"candidates": []}));
    });

    let err = gemini(&server).invoke("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyContent));
}

#[tokio::test]
async fn test_gemini_whitespace_only_text_is_empty_content() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200).json_body(json!({
            "candidates": [{"content": {"parts": [{"text": "   \n  "}]}}]
        }));
    });

    let err = gemini(&server).invoke("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyContent));
}

#[tokio::test]
async fn test_gemini_malformed_envelope_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("generateContent");
        then.status(200).body("not json at all");
    });

    let err = gemini(&server).invoke("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Parse(_)));
}

#[tokio::test]
async fn test_openai_returns_choice_content() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(r#"{"model": "gpt-4o-mini"}"#);
        then.status(200).json_body(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Alpha Consulting is a leading firm."}}
            ]
        }));
    });

    let text = openai(&server).invoke("Write the profile.").await.unwrap();
    assert_eq!(text, "Alpha Consulting is a leading firm.");
    mock.assert();
}

#[tokio::test]
async fn test_openai_error_envelope_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(401).json_body(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        }));
    });

    let err = openai(&server).invoke("prompt").await.unwrap_err();
    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_openai_null_content_is_empty_content() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }));
    });

    let err = openai(&server).invoke("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyContent));
}

#[tokio::test]
async fn test_openai_sends_system_and_user_messages() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .json_body_partial(
                r#"{"messages": [
                    {"role": "system", "content": "You analyze project relevancy and suggest improvements."},
                    {"role": "user", "content": "Score these projects."}
                ]}"#,
            );
        then.status(200).json_body(json!({
            "choices": [{"message": {"role": "assistant", "content": "{}"}}]
        }));
    });

    let client = openai(&server)
        .with_system("You analyze project relevancy and suggest improvements.");
    client.invoke("Score these projects.").await.unwrap();
    mock.assert();
}
