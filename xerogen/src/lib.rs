//! Unified facade over the xerogen workspace crates.
//!
//! Most applications depend on this crate alone: it re-exports the provider,
//! store, chat, and observability crates and wires them from a [`RuntimeConfig`].
//!
//! ```rust,no_run
//! use xerogen::prelude::*;
//!
//! # async fn run() -> Result<(), ChatError> {
//! xerogen::init_tracing();
//! let runtime = build_runtime(&RuntimeConfig::from_env()?)?;
//! let reply = runtime
//!     .orchestrator
//!     .respond(
//!         OrchestrateRequest::new("haiku", "autumn rain")
//!             .with_credential("work")
//!             .with_directive(Directive::new().with_style())
//!             .with_persist(true),
//!     )
//!     .await;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

mod config;
mod logging;

pub mod prelude;
pub mod runtime;

pub use xchat;
pub use xcommon;
pub use xobserve;
pub use xprovider;
pub use xstore;

pub use xchat::{
    ChatError, ChatErrorKind, Directive, Exchange, NoopOrchestrationHooks, OUTPUT_SEPARATOR,
    OrchestrateRequest, OrchestrationHooks, Orchestrator, PendingOutputs, SessionPhase,
    SessionRegistry, SessionTransition,
};
pub use xcommon::{BoxFuture, TemplateLabel};
pub use xobserve::{
    MetricsObservabilityHooks, SafeOrchestrationHooks, SafeProviderHooks,
    TracingObservabilityHooks,
};
pub use xprovider::{
    ChatProvider, CompletionRequest, CompletionResult, DEFAULT_MODEL, NoopOperationHooks,
    ProviderError, ProviderErrorKind, ProviderFuture, ProviderOperationHooks, Role, SecretString,
    Turn,
};
pub use xstore::{
    ArchiveRecord, CsvLabelStore, CsvResponseArchive, InMemoryLabelStore,
    InMemoryResponseArchive, LabelStore, LabelTable, ResponseArchive, StoreError, StoreErrorKind,
};

pub use config::{
    ARCHIVE_PATH_VAR, BASE_URL_VAR, CREDENTIALS_PATH_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL_VAR,
    REQUEST_TIMEOUT_VAR, RuntimeConfig, TEMPLATES_PATH_VAR,
};
pub use logging::init_tracing;
pub use runtime::{RuntimeBundle, build_runtime, build_runtime_with};
