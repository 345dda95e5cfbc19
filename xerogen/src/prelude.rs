//! Common imports for most xerogen applications.

pub use crate::{RuntimeBundle, RuntimeConfig, build_runtime, build_runtime_with, init_tracing};
pub use crate::{
    ChatError, ChatErrorKind, ChatProvider, CsvLabelStore, CsvResponseArchive, Directive,
    InMemoryLabelStore, InMemoryResponseArchive, LabelStore, OrchestrateRequest,
    OrchestrationHooks, Orchestrator, ProviderError, ResponseArchive, SecretString, SessionPhase,
    SessionTransition, TemplateLabel, Turn,
};
