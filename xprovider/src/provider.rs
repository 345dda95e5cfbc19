use std::future::Future;
use std::pin::Pin;

use crate::{CompletionRequest, CompletionResult, SecretString};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A hosted chat-completion API reached with a bearer credential.
pub trait ChatProvider: Send + Sync {
    /// Model used when the caller does not choose one.
    fn default_model(&self) -> &str;

    /// Available model ids with the default model first. Empty when listing fails.
    fn list_models<'a>(&'a self, secret: &'a SecretString) -> ProviderFuture<'a, Vec<String>>;

    fn complete<'a>(
        &'a self,
        secret: &'a SecretString,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, CompletionResult>;
}
