//! Runtime wiring: CSV tables, the HTTP provider, observability hooks, and the orchestrator.

use std::sync::Arc;

use xchat::{ChatError, OrchestrationHooks, Orchestrator};
use xobserve::{SafeOrchestrationHooks, SafeProviderHooks, TracingObservabilityHooks};
use xprovider::{ChatProvider, ProviderError};
use xstore::{CsvLabelStore, CsvResponseArchive, LabelStore, ResponseArchive};

use crate::RuntimeConfig;

#[derive(Clone)]
pub struct RuntimeBundle {
    pub credentials: Arc<dyn LabelStore>,
    pub templates: Arc<dyn LabelStore>,
    pub archive: Arc<dyn ResponseArchive>,
    pub orchestrator: Arc<Orchestrator>,
}

/// Creates the three CSV tables (with headers) when absent and wires the OpenAI provider.
pub fn build_runtime(config: &RuntimeConfig) -> Result<RuntimeBundle, ChatError> {
    let credentials = CsvLabelStore::credentials(&config.credentials_path);
    let templates = CsvLabelStore::templates(&config.templates_path);
    let archive = CsvResponseArchive::new(&config.archive_path);

    credentials.bootstrap()?;
    templates.bootstrap()?;
    archive.bootstrap()?;
    tracing::debug!(
        credentials = %config.credentials_path.display(),
        templates = %config.templates_path.display(),
        archive = %config.archive_path.display(),
        "tables ready"
    );

    let provider = http_provider(config)?;
    Ok(build_runtime_with(
        provider,
        Arc::new(credentials),
        Arc::new(templates),
        Arc::new(archive),
        Arc::new(SafeOrchestrationHooks::new(TracingObservabilityHooks)),
    ))
}

pub fn build_runtime_with(
    provider: Arc<dyn ChatProvider>,
    credentials: Arc<dyn LabelStore>,
    templates: Arc<dyn LabelStore>,
    archive: Arc<dyn ResponseArchive>,
    hooks: Arc<dyn OrchestrationHooks>,
) -> RuntimeBundle {
    let orchestrator = Orchestrator::new(
        provider,
        Arc::clone(&credentials),
        Arc::clone(&templates),
        Arc::clone(&archive),
    )
    .with_hooks(hooks);

    RuntimeBundle {
        credentials,
        templates,
        archive,
        orchestrator: Arc::new(orchestrator),
    }
}

#[cfg(feature = "provider-openai")]
fn http_provider(config: &RuntimeConfig) -> Result<Arc<dyn ChatProvider>, ChatError> {
    use xprovider::adapters::openai::{OpenAiHttpTransport, OpenAiProvider};

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))?;
    let transport = OpenAiHttpTransport::new(http).with_base_url(config.base_url.clone());

    Ok(Arc::new(
        OpenAiProvider::new(Arc::new(transport))
            .with_default_model(config.default_model.clone())
            .with_hooks(Arc::new(SafeProviderHooks::new(TracingObservabilityHooks))),
    ))
}

#[cfg(not(feature = "provider-openai"))]
fn http_provider(_config: &RuntimeConfig) -> Result<Arc<dyn ChatProvider>, ChatError> {
    Err(ProviderError::invalid_request("provider-openai feature is not enabled on xerogen").into())
}
