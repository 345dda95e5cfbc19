#![cfg(feature = "provider-openai")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use xprovider::adapters::openai::{
    OpenAiAuth, OpenAiEngine, OpenAiProvider, OpenAiRequest, OpenAiResponse, OpenAiRole,
    OpenAiTransport,
};
use xprovider::{
    ChatProvider, CompletionRequest, ProviderError, ProviderErrorKind, ProviderFuture,
    ProviderOperationHooks, SecretString, Turn,
};

#[derive(Debug)]
struct FakeTransport {
    engines: Result<Vec<&'static str>, ProviderError>,
    completion: Result<&'static str, ProviderError>,
    calls: AtomicUsize,
    captured_auth: Mutex<Option<String>>,
    captured_request: Mutex<Option<OpenAiRequest>>,
}

impl FakeTransport {
    fn new() -> Self {
        Self {
            engines: Ok(vec!["davinci", "gpt-4", "gpt-3.5-turbo"]),
            completion: Ok("  a crisp reply \n"),
            calls: AtomicUsize::new(0),
            captured_auth: Mutex::new(None),
            captured_request: Mutex::new(None),
        }
    }

    fn capture_auth(&self, auth: OpenAiAuth) {
        let OpenAiAuth::Bearer(secret) = auth;
        *self.captured_auth.lock().expect("auth lock") = Some(secret.expose().to_string());
    }
}

impl OpenAiTransport for FakeTransport {
    fn list_engines<'a>(
        &'a self,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<Vec<OpenAiEngine>, ProviderError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.capture_auth(auth);
            self.engines.clone().map(|ids| {
                ids.into_iter()
                    .map(|id| OpenAiEngine { id: id.to_string() })
                    .collect()
            })
        })
    }

    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, ProviderError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.capture_auth(auth);
            *self.captured_request.lock().expect("request lock") = Some(request);
            self.completion.clone().map(|content| OpenAiResponse {
                content: content.to_string(),
            })
        })
    }
}

#[derive(Default)]
struct RecordingHooks {
    events: Mutex<Vec<String>>,
}

impl ProviderOperationHooks for RecordingHooks {
    fn on_attempt_start(&self, operation: &str) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("start:{operation}"));
    }

    fn on_success(&self, operation: &str) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("success:{operation}"));
    }

    fn on_failure(&self, operation: &str, error: &ProviderError) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("failure:{operation}:{}", error.message));
    }
}

#[tokio::test]
async fn list_models_promotes_default_model_to_front() {
    let transport = Arc::new(FakeTransport::new());
    let provider = OpenAiProvider::new(transport.clone());

    let models = provider.list_models(&SecretString::new("sk-live-123")).await;
    assert_eq!(models, vec!["gpt-3.5-turbo", "davinci", "gpt-4"]);

    let auth = transport.captured_auth.lock().expect("auth lock").clone();
    assert_eq!(auth.as_deref(), Some("sk-live-123"));
}

#[tokio::test]
async fn list_models_failure_returns_empty_and_reports_error() {
    let mut transport = FakeTransport::new();
    transport.engines = Err(ProviderError::api("Incorrect API key provided"));
    let hooks = Arc::new(RecordingHooks::default());
    let provider = OpenAiProvider::new(Arc::new(transport)).with_hooks(hooks.clone());

    let models = provider.list_models(&SecretString::new("sk-bad")).await;
    assert!(models.is_empty());

    let events = hooks.events.lock().expect("events lock").clone();
    assert_eq!(
        events,
        vec![
            "start:list_models".to_string(),
            "failure:list_models:Incorrect API key provided".to_string(),
        ]
    );
}

#[tokio::test]
async fn complete_trims_content_and_sends_turns_in_order() {
    let transport = Arc::new(FakeTransport::new());
    let provider = OpenAiProvider::new(transport.clone());
    let request = CompletionRequest::new(
        "gpt-4",
        vec![Turn::system("You write taglines."), Turn::user("coffee")],
    );

    let reply = provider
        .complete(&SecretString::new("sk-live-123"), request)
        .await
        .expect("completion should succeed");
    assert_eq!(reply, "a crisp reply");

    let sent = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request should be captured");
    assert_eq!(sent.model, "gpt-4");
    assert_eq!(sent.messages.len(), 2);
    assert_eq!(sent.messages[0].role, OpenAiRole::System);
    assert_eq!(sent.messages[1].content, "coffee");
}

#[tokio::test]
async fn complete_passes_provider_error_through_without_retrying() {
    let mut transport = FakeTransport::new();
    transport.completion = Err(ProviderError::api("The model `gpt-9` does not exist"));
    let transport = Arc::new(transport);
    let provider = OpenAiProvider::new(transport.clone());

    let error = provider
        .complete(
            &SecretString::new("sk-live-123"),
            CompletionRequest::new("gpt-9", vec![Turn::user("hi")]),
        )
        .await
        .expect_err("provider error should surface");
    assert_eq!(error.kind, ProviderErrorKind::Api);
    assert!(error.message.contains("does not exist"));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_secret_fails_before_reaching_transport() {
    let transport = Arc::new(FakeTransport::new());
    let provider = OpenAiProvider::new(transport.clone());

    let error = provider
        .complete(
            &SecretString::new(""),
            CompletionRequest::new("gpt-4", vec![Turn::user("hi")]),
        )
        .await
        .expect_err("blank secret should fail");
    assert_eq!(error.kind, ProviderErrorKind::Authentication);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}
