//! OpenAI adapter types and provider-agnostic conversion logic.

use std::fmt::Formatter;

use crate::{CompletionRequest, Role, SecretString, Turn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
}

impl From<CompletionRequest> for OpenAiRequest {
    fn from(value: CompletionRequest) -> Self {
        Self {
            model: value.model,
            messages: value.turns.into_iter().map(OpenAiMessage::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiMessage {
    pub role: OpenAiRole,
    pub content: String,
}

impl From<Turn> for OpenAiMessage {
    fn from(value: Turn) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAiRole {
    System,
    User,
    Assistant,
}

impl OpenAiRole {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl From<Role> for OpenAiRole {
    fn from(value: Role) -> Self {
        match value {
            Role::System => Self::System,
            Role::User => Self::User,
            Role::Assistant => Self::Assistant,
        }
    }
}

/// First choice of a chat completion, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiResponse {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiEngine {
    pub id: String,
}

#[derive(Clone, PartialEq, Eq)]
pub enum OpenAiAuth {
    Bearer(SecretString),
}

impl OpenAiAuth {
    pub fn bearer(secret: &SecretString) -> Self {
        Self::Bearer(secret.clone())
    }
}

impl std::fmt::Debug for OpenAiAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("OpenAiAuth::Bearer([REDACTED])"),
        }
    }
}
