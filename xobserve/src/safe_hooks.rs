use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use xchat::{ChatError, OrchestrationHooks, SessionTransition};
use xcommon::TemplateLabel;
use xprovider::{ProviderError, ProviderOperationHooks};

pub struct SafeProviderHooks<H> {
    inner: H,
}

impl<H> SafeProviderHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ProviderOperationHooks for SafeProviderHooks<H>
where
    H: ProviderOperationHooks,
{
    fn on_attempt_start(&self, operation: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_attempt_start(operation)));
    }

    fn on_success(&self, operation: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_success(operation)));
    }

    fn on_failure(&self, operation: &str, error: &ProviderError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(operation, error)
        }));
    }
}

pub struct SafeOrchestrationHooks<H> {
    inner: H,
}

impl<H> SafeOrchestrationHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> OrchestrationHooks for SafeOrchestrationHooks<H>
where
    H: OrchestrationHooks,
{
    fn on_credential_resolved(&self, credential_label: &str, newly_stored: bool) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_credential_resolved(credential_label, newly_stored)
        }));
    }

    fn on_session_transition(
        &self,
        template: &TemplateLabel,
        transition: SessionTransition,
        stored_turns: usize,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_session_transition(template, transition, stored_turns)
        }));
    }

    fn on_completion_success(&self, template: &TemplateLabel, model: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_completion_success(template, model, elapsed)
        }));
    }

    fn on_completion_failure(
        &self,
        template: &TemplateLabel,
        model: &str,
        error: &ChatError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_completion_failure(template, model, error, elapsed)
        }));
    }

    fn on_archived(&self, rows: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_archived(rows)));
    }
}
