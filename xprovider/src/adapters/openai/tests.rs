//! Focused unit tests for OpenAI adapter internals.

#![cfg(test)]

use std::sync::Arc;

use serde_json::json;

use crate::{CompletionRequest, ProviderError, ProviderErrorKind, ProviderFuture, Role, Turn};

use super::provider::OpenAiProvider;
use super::serde_api::{
    build_api_request, extract_error_message, parse_completion_body, parse_engine_list_body,
};
use super::transport::OpenAiTransport;
use super::types::{OpenAiAuth, OpenAiEngine, OpenAiRequest, OpenAiResponse, OpenAiRole};

#[derive(Debug)]
struct NoopTransport;

impl OpenAiTransport for NoopTransport {
    fn list_engines<'a>(
        &'a self,
        _auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<Vec<OpenAiEngine>, ProviderError>> {
        Box::pin(async { Err(ProviderError::other("not used")) })
    }

    fn complete<'a>(
        &'a self,
        _request: OpenAiRequest,
        _auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, ProviderError>> {
        Box::pin(async { Err(ProviderError::other("not used")) })
    }
}

#[test]
fn build_openai_request_falls_back_to_default_model() {
    let provider = OpenAiProvider::new(Arc::new(NoopTransport)).with_default_model("gpt-4o-mini");
    let request = CompletionRequest::new("  ", vec![Turn::user("hi")]);

    let built = provider
        .build_openai_request(request)
        .expect("request should build");
    assert_eq!(built.model, "gpt-4o-mini");
    assert_eq!(built.messages.len(), 1);
    assert_eq!(built.messages[0].role, OpenAiRole::User);
}

#[test]
fn build_openai_request_keeps_turn_order_and_roles() {
    let provider = OpenAiProvider::new(Arc::new(NoopTransport));
    let request = CompletionRequest::new(
        "gpt-3.5-turbo",
        vec![
            Turn::new(Role::System, "You write haiku."),
            Turn::user("autumn"),
            Turn::assistant("leaves fall"),
        ],
    );

    let built = provider
        .build_openai_request(request)
        .expect("request should build");
    let roles = built.messages.iter().map(|m| m.role).collect::<Vec<_>>();
    assert_eq!(
        roles,
        vec![OpenAiRole::System, OpenAiRole::User, OpenAiRole::Assistant]
    );
}

#[test]
fn api_request_serializes_model_and_messages_only() {
    let request = OpenAiRequest {
        model: "gpt-3.5-turbo".to_string(),
        messages: vec![super::types::OpenAiMessage {
            role: OpenAiRole::System,
            content: "be brief".to_string(),
        }],
    };

    let api_request = build_api_request(request).expect("request should build");
    let encoded = serde_json::to_value(&api_request).expect("request should encode");
    assert_eq!(
        encoded,
        json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "system", "content": "be brief"}]
        })
    );
}

#[test]
fn api_request_requires_messages() {
    let request = OpenAiRequest {
        model: "gpt-3.5-turbo".to_string(),
        messages: Vec::new(),
    };

    let error = build_api_request(request).expect_err("empty request must fail");
    assert_eq!(error.kind, ProviderErrorKind::InvalidRequest);
}

#[test]
fn completion_body_with_choices_returns_first_choice() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "  first  "}},
            {"message": {"role": "assistant", "content": "second"}}
        ]
    }"#;

    let response = parse_completion_body(body).expect("choices should parse");
    assert_eq!(response.content, "  first  ");
}

#[test]
fn completion_body_without_choices_surfaces_provider_error() {
    let body = r#"{"error": {"message": "You exceeded your current quota", "type": "insufficient_quota"}}"#;

    let error = parse_completion_body(body).expect_err("error body must fail");
    assert_eq!(error.kind, ProviderErrorKind::Api);
    assert_eq!(error.message, "You exceeded your current quota");
}

#[test]
fn completion_body_with_neither_shape_reports_unknown_error() {
    let error = parse_completion_body("{}").expect_err("empty object must fail");
    assert_eq!(error.message, "Unknown error.");
}

#[test]
fn non_json_body_is_a_transport_error() {
    let error = parse_completion_body("<html>502</html>").expect_err("html must fail");
    assert_eq!(error.kind, ProviderErrorKind::Transport);
}

#[test]
fn engine_listing_preserves_provider_order() {
    let body = r#"{"data": [{"id": "davinci"}, {"id": "gpt-3.5-turbo"}], "object": "list"}"#;

    let engines = parse_engine_list_body(body).expect("listing should parse");
    let ids = engines.into_iter().map(|engine| engine.id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["davinci", "gpt-3.5-turbo"]);
}

#[test]
fn error_message_extraction_handles_each_payload_shape() {
    assert_eq!(
        extract_error_message(&json!({"error": {"message": "bad key"}})),
        "bad key"
    );
    assert_eq!(extract_error_message(&json!({"error": "plain"})), "plain");
    assert_eq!(
        extract_error_message(&json!({"error": {"code": 42}})),
        r#"{"code":42}"#
    );
    assert_eq!(extract_error_message(&json!({"error": null})), "Unknown error.");
    assert_eq!(extract_error_message(&json!({"other": 1})), "Unknown error.");
}
