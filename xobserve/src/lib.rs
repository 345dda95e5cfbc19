//! Production-friendly observability hooks for provider calls and orchestration.
//!
//! ```rust
//! use xobserve::{MetricsObservabilityHooks, SafeOrchestrationHooks, SafeProviderHooks, TracingObservabilityHooks};
//!
//! let _provider_hooks = SafeProviderHooks::new(TracingObservabilityHooks);
//! let _orchestration_hooks = SafeOrchestrationHooks::new(MetricsObservabilityHooks);
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeOrchestrationHooks, SafeProviderHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafeOrchestrationHooks, SafeProviderHooks,
        TracingObservabilityHooks,
    };
}
