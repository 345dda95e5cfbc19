//! OpenAI HTTP payload serde models and body decoding.
//!
//! Success is decided by body shape: a completion body is successful when it carries
//! `choices`, an engine listing when it carries `data`. Anything else is read as an
//! error envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ProviderError;

use super::types::{OpenAiEngine, OpenAiMessage, OpenAiRequest, OpenAiResponse};

const UNKNOWN_ERROR: &str = "Unknown error.";

pub(crate) fn build_api_request(request: OpenAiRequest) -> Result<OpenAiApiRequest, ProviderError> {
    if request.messages.is_empty() {
        return Err(ProviderError::invalid_request(
            "OpenAI request requires at least one message",
        ));
    }

    Ok(OpenAiApiRequest {
        model: request.model,
        messages: request
            .messages
            .into_iter()
            .map(OpenAiApiMessage::from)
            .collect(),
    })
}

/// Decodes a `/chat/completions` body into the first choice or the provider's error.
///
/// ```rust
/// use xprovider::adapters::openai::parse_completion_body;
///
/// let ok = parse_completion_body(r#"{"choices":[{"message":{"content":" hi "}}]}"#);
/// assert_eq!(ok.expect("choices present").content, " hi ");
///
/// let err = parse_completion_body(r#"{"error":{"message":"Invalid API key"}}"#);
/// assert_eq!(err.expect_err("error body").message, "Invalid API key");
/// ```
pub fn parse_completion_body(body: &str) -> Result<OpenAiResponse, ProviderError> {
    let value = parse_json(body)?;
    if value.get("choices").is_none() {
        return Err(ProviderError::api(extract_error_message(&value)));
    }

    let parsed = serde_json::from_value::<OpenAiApiResponse>(value)
        .map_err(|err| ProviderError::transport(format!("malformed completion response: {err}")))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::transport("OpenAI response did not include choices"))?;

    Ok(OpenAiResponse {
        content: choice.message.content.unwrap_or_default(),
    })
}

/// Decodes a `/engines` body into engine ids in provider order.
pub fn parse_engine_list_body(body: &str) -> Result<Vec<OpenAiEngine>, ProviderError> {
    let value = parse_json(body)?;
    if value.get("data").is_none() {
        return Err(ProviderError::api(extract_error_message(&value)));
    }

    let parsed = serde_json::from_value::<OpenAiApiEngineList>(value)
        .map_err(|err| ProviderError::transport(format!("malformed engine listing: {err}")))?;

    Ok(parsed
        .data
        .into_iter()
        .map(|engine| OpenAiEngine { id: engine.id })
        .collect())
}

pub(crate) fn extract_error_message(value: &Value) -> String {
    match value.get("error") {
        Some(Value::Object(error)) => error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Value::Object(error.clone()).to_string()),
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
        Some(other) => other.to_string(),
    }
}

fn parse_json(body: &str) -> Result<Value, ProviderError> {
    serde_json::from_str::<Value>(body)
        .map_err(|err| ProviderError::transport(format!("provider returned a non-JSON body: {err}")))
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiRequest {
    pub model: String,
    pub messages: Vec<OpenAiApiMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<OpenAiMessage> for OpenAiApiMessage {
    fn from(value: OpenAiMessage) -> Self {
        Self {
            role: value.role.as_str(),
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiResponse {
    pub choices: Vec<OpenAiApiChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiChoice {
    pub message: OpenAiApiAssistantMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiAssistantMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiEngineList {
    pub data: Vec<OpenAiApiEngine>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiEngine {
    pub id: String,
}
