//! Operational hook contract for provider calls.
//!
//! Provider calls are attempted exactly once; hooks observe the attempt and its outcome.
//! `operation` is `"list_models"` or `"complete"`.

use crate::ProviderError;

pub trait ProviderOperationHooks: Send + Sync {
    fn on_attempt_start(&self, _operation: &str) {}

    fn on_success(&self, _operation: &str) {}

    fn on_failure(&self, _operation: &str, _error: &ProviderError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperationHooks;

impl ProviderOperationHooks for NoopOperationHooks {}
