//! Tracing-based observability hooks for provider calls and orchestration.
//!
//! ```rust
//! use xobserve::TracingObservabilityHooks;
//! use xchat::OrchestrationHooks;
//!
//! fn accepts_orchestration_hooks(_hooks: &dyn OrchestrationHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_orchestration_hooks(&hooks);
//! ```

use std::time::Duration;

use xchat::{ChatError, OrchestrationHooks, SessionTransition};
use xcommon::TemplateLabel;
use xprovider::{ProviderError, ProviderOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ProviderOperationHooks for TracingObservabilityHooks {
    fn on_attempt_start(&self, operation: &str) {
        tracing::debug!(phase = "provider", event = "attempt_start", operation);
    }

    fn on_success(&self, operation: &str) {
        tracing::info!(phase = "provider", event = "success", operation);
    }

    fn on_failure(&self, operation: &str, error: &ProviderError) {
        if operation == "list_models" {
            tracing::warn!(
                phase = "provider",
                event = "failure",
                operation,
                error_kind = ?error.kind,
                retryable = error.retryable,
                error = %error.message
            );
            return;
        }

        tracing::error!(
            phase = "provider",
            event = "failure",
            operation,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error.message
        );
    }
}

impl OrchestrationHooks for TracingObservabilityHooks {
    fn on_credential_resolved(&self, credential_label: &str, newly_stored: bool) {
        tracing::info!(
            phase = "orchestration",
            event = "credential_resolved",
            credential_label,
            newly_stored
        );
    }

    fn on_session_transition(
        &self,
        template: &TemplateLabel,
        transition: SessionTransition,
        stored_turns: usize,
    ) {
        tracing::debug!(
            phase = "orchestration",
            event = "session_transition",
            template = %template,
            transition = transition.as_str(),
            stored_turns
        );
    }

    fn on_completion_success(&self, template: &TemplateLabel, model: &str, elapsed: Duration) {
        tracing::info!(
            phase = "orchestration",
            event = "completion_success",
            template = %template,
            model,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_completion_failure(
        &self,
        template: &TemplateLabel,
        model: &str,
        error: &ChatError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "orchestration",
            event = "completion_failure",
            template = %template,
            model,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error.message
        );
    }

    fn on_archived(&self, rows: usize) {
        tracing::info!(phase = "orchestration", event = "archived", rows);
    }
}
