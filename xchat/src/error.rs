//! Chat-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    InvalidRequest,
    CredentialNotFound,
    TemplateNotFound,
    Provider,
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }

    pub fn credential_not_found(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::CredentialNotFound, message)
    }

    pub fn template_not_found(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::TemplateNotFound, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Provider, message)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Store, message)
    }

    /// Text shown to the person at the form in place of a reply.
    pub fn user_message(&self) -> String {
        format!("Error: {}", self.message)
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ChatError {}

impl From<xprovider::ProviderError> for ChatError {
    fn from(value: xprovider::ProviderError) -> Self {
        ChatError::provider(value.message)
    }
}

impl From<xstore::StoreError> for ChatError {
    fn from(value: xstore::StoreError) -> Self {
        ChatError::store(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use xprovider::ProviderError;
    use xstore::StoreError;

    use super::{ChatError, ChatErrorKind};

    #[test]
    fn provider_errors_keep_provider_text_for_users() {
        let error = ChatError::from(ProviderError::api("You exceeded your current quota"));
        assert_eq!(error.kind, ChatErrorKind::Provider);
        assert_eq!(error.user_message(), "Error: You exceeded your current quota");
    }

    #[test]
    fn store_errors_carry_store_classification() {
        let error = ChatError::from(StoreError::malformed("row 3 has 1 columns"));
        assert_eq!(error.kind, ChatErrorKind::Store);
        assert_eq!(error.to_string(), "Store: Malformed: row 3 has 1 columns");
    }
}
