//! Provider-agnostic turn and request model types.
//!
//! ```rust
//! use xprovider::{CompletionRequest, ProviderErrorKind, Role, Turn};
//!
//! let ok = CompletionRequest::new_validated(
//!     "gpt-3.5-turbo",
//!     vec![Turn::new(Role::System, "You write haiku."), Turn::user("autumn")],
//! );
//! assert!(ok.is_ok());
//!
//! let err = CompletionRequest::new_validated("", vec![Turn::user("hi")])
//!     .err()
//!     .expect("empty model should fail");
//! assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
//! ```

use crate::ProviderError;

/// Model promoted to the front of every catalog and used when no model is chosen.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One message unit of a conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub turns: Vec<Turn>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, turns: Vec<Turn>) -> Self {
        Self {
            model: model.into(),
            turns,
        }
    }

    pub fn new_validated(
        model: impl Into<String>,
        turns: Vec<Turn>,
    ) -> Result<Self, ProviderError> {
        let request = Self::new(model, turns);
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.turns.is_empty() {
            return Err(ProviderError::invalid_request("at least one turn is required"));
        }

        Ok(())
    }
}

/// Outcome of one completion call. Never surfaced as a panic.
pub type CompletionResult = Result<String, ProviderError>;

/// Moves `default_model` to the front of `models` when it is listed anywhere.
pub fn promote_default_model(models: &mut Vec<String>, default_model: &str) {
    if let Some(index) = models.iter().position(|model| model == default_model) {
        let model = models.remove(index);
        models.insert(0, model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn validate_rejects_blank_model_and_empty_turns() {
        let blank_model = CompletionRequest::new("  ", vec![Turn::user("hi")]);
        assert_eq!(
            blank_model.validate().expect_err("blank model").kind,
            ProviderErrorKind::InvalidRequest
        );

        let no_turns = CompletionRequest::new("gpt-3.5-turbo", Vec::new());
        assert_eq!(
            no_turns.validate().expect_err("no turns").kind,
            ProviderErrorKind::InvalidRequest
        );
    }

    #[test]
    fn promote_default_model_moves_default_to_front() {
        let mut models = vec![
            "davinci".to_string(),
            "gpt-4".to_string(),
            "gpt-3.5-turbo".to_string(),
        ];
        promote_default_model(&mut models, DEFAULT_MODEL);
        assert_eq!(models, vec!["gpt-3.5-turbo", "davinci", "gpt-4"]);
    }

    #[test]
    fn promote_default_model_leaves_list_without_default_untouched() {
        let mut models = vec!["davinci".to_string(), "gpt-4".to_string()];
        promote_default_model(&mut models, DEFAULT_MODEL);
        assert_eq!(models, vec!["davinci", "gpt-4"]);
    }

    #[test]
    fn role_names_match_wire_format() {
        assert_eq!(Role::System.as_str(), "system");
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }
}
