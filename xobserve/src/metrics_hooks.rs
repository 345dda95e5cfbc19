//! Metrics-based observability hooks for provider calls and orchestration.
//!
//! ```rust
//! use xobserve::MetricsObservabilityHooks;
//! use xprovider::ProviderOperationHooks;
//!
//! fn accepts_provider_hooks(_hooks: &dyn ProviderOperationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_provider_hooks(&hooks);
//! ```

use std::time::Duration;

use xchat::{ChatError, OrchestrationHooks, SessionTransition};
use xcommon::TemplateLabel;
use xprovider::{ProviderError, ProviderOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ProviderOperationHooks for MetricsObservabilityHooks {
    fn on_attempt_start(&self, operation: &str) {
        metrics::counter!(
            "xerogen_provider_attempt_start_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_success(&self, operation: &str) {
        metrics::counter!(
            "xerogen_provider_success_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_failure(&self, operation: &str, error: &ProviderError) {
        metrics::counter!(
            "xerogen_provider_failure_total",
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}

impl OrchestrationHooks for MetricsObservabilityHooks {
    fn on_credential_resolved(&self, _credential_label: &str, newly_stored: bool) {
        metrics::counter!(
            "xerogen_credential_resolved_total",
            "newly_stored" => newly_stored.to_string()
        )
        .increment(1);
    }

    fn on_session_transition(
        &self,
        _template: &TemplateLabel,
        transition: SessionTransition,
        stored_turns: usize,
    ) {
        metrics::counter!(
            "xerogen_session_transition_total",
            "transition" => transition.as_str()
        )
        .increment(1);
        metrics::histogram!("xerogen_session_stored_turns").record(stored_turns as f64);
    }

    fn on_completion_success(&self, template: &TemplateLabel, model: &str, elapsed: Duration) {
        metrics::counter!(
            "xerogen_completion_success_total",
            "template" => template.to_string(),
            "model" => model.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "xerogen_completion_duration_seconds",
            "model" => model.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_completion_failure(
        &self,
        template: &TemplateLabel,
        model: &str,
        error: &ChatError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "xerogen_completion_failure_total",
            "template" => template.to_string(),
            "model" => model.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "xerogen_completion_duration_seconds",
            "model" => model.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_archived(&self, rows: usize) {
        metrics::counter!("xerogen_archived_rows_total").increment(rows as u64);
    }
}
