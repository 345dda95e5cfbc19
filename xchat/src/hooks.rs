//! Orchestration hook contracts for observing exchanges.
//!
//! ```rust
//! use xchat::{NoopOrchestrationHooks, OrchestrationHooks};
//!
//! fn accepts_hooks(_hooks: &dyn OrchestrationHooks) {}
//!
//! let hooks = NoopOrchestrationHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use xcommon::TemplateLabel;

use crate::{ChatError, SessionTransition};

pub trait OrchestrationHooks: Send + Sync {
    fn on_credential_resolved(&self, _credential_label: &str, _newly_stored: bool) {}

    fn on_session_transition(
        &self,
        _template: &TemplateLabel,
        _transition: SessionTransition,
        _stored_turns: usize,
    ) {
    }

    fn on_completion_success(&self, _template: &TemplateLabel, _model: &str, _elapsed: Duration) {}

    fn on_completion_failure(
        &self,
        _template: &TemplateLabel,
        _model: &str,
        _error: &ChatError,
        _elapsed: Duration,
    ) {
    }

    fn on_archived(&self, _rows: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOrchestrationHooks;

impl OrchestrationHooks for NoopOrchestrationHooks {}
