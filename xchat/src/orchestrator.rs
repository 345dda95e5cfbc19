//! Conversation orchestration: one exchange from form input to reply.

use std::sync::Arc;
use std::time::Instant;

use xcommon::TemplateLabel;
use xprovider::{ChatProvider, CompletionRequest, SecretString};
use xstore::{LabelStore, ResponseArchive};

use crate::session::outbound_turns;
use crate::{
    ChatError, NoopOrchestrationHooks, OrchestrateRequest, OrchestrationHooks, PendingOutputs,
    SessionRegistry,
};

/// Joins multiple outputs of one exchange into the returned reply.
pub const OUTPUT_SEPARATOR: &str = "\n---\n";

pub struct Orchestrator {
    provider: Arc<dyn ChatProvider>,
    credentials: Arc<dyn LabelStore>,
    templates: Arc<dyn LabelStore>,
    archive: Arc<dyn ResponseArchive>,
    hooks: Arc<dyn OrchestrationHooks>,
    sessions: SessionRegistry,
    pending: PendingOutputs,
    exchange_guard: tokio::sync::Mutex<()>,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        credentials: Arc<dyn LabelStore>,
        templates: Arc<dyn LabelStore>,
        archive: Arc<dyn ResponseArchive>,
    ) -> Self {
        Self {
            provider,
            credentials,
            templates,
            archive,
            hooks: Arc::new(NoopOrchestrationHooks),
            sessions: SessionRegistry::new(),
            pending: PendingOutputs::new(),
            exchange_guard: tokio::sync::Mutex::new(()),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn OrchestrationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn pending(&self) -> &PendingOutputs {
        &self.pending
    }

    /// Runs one exchange. Exchanges are serialized across the whole orchestrator.
    pub async fn orchestrate(&self, request: OrchestrateRequest) -> Result<String, ChatError> {
        let _exchange = self.exchange_guard.lock().await;

        let OrchestrateRequest {
            new_credential_label,
            new_credential_secret,
            credential_label,
            template_label,
            message,
            model,
            directive,
            persist,
        } = request;

        directive.validate()?;
        if template_label.is_blank() {
            return Err(ChatError::invalid_request("no prompt template was selected"));
        }
        let system_prompt = self.lookup_template(&template_label).await?;
        let secret = self
            .resolve_credential(new_credential_label, new_credential_secret, credential_label)
            .await?;

        let outbound = directive.transform(&message);
        let exchange = self.sessions.begin_exchange(&template_label, outbound.clone())?;
        self.hooks.on_session_transition(
            &template_label,
            exchange.transition,
            exchange.turns.len(),
        );

        let model = model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_model().to_string());
        let request = CompletionRequest::new(
            model.clone(),
            outbound_turns(&system_prompt, exchange.turns),
        );

        let started = Instant::now();
        let reply = match self.provider.complete(&secret, request).await {
            Ok(reply) => reply,
            Err(error) => {
                let error = ChatError::from(error);
                self.hooks.on_completion_failure(
                    &template_label,
                    &model,
                    &error,
                    started.elapsed(),
                );
                return Err(error);
            }
        };
        self.hooks
            .on_completion_success(&template_label, &model, started.elapsed());

        self.sessions.record_reply(&template_label, reply.clone())?;
        let outputs = vec![reply];
        self.pending.fill(outputs.clone())?;

        if persist {
            self.drain_pending(&outbound).await?;
        }

        Ok(outputs.join(OUTPUT_SEPARATOR))
    }

    /// Like [`Orchestrator::orchestrate`], with errors rendered as `"Error: <message>"`.
    pub async fn respond(&self, request: OrchestrateRequest) -> String {
        match self.orchestrate(request).await {
            Ok(reply) => reply,
            Err(error) => error.user_message(),
        }
    }

    /// Archives and clears the pending outputs. Returns rows written.
    pub async fn archive_pending(&self, outbound_message: &str) -> Result<usize, ChatError> {
        let _exchange = self.exchange_guard.lock().await;
        self.drain_pending(outbound_message).await
    }

    pub async fn credential_labels(&self) -> Result<Vec<String>, ChatError> {
        let table = self.credentials.all().await?;
        Ok(table.labels().into_iter().map(str::to_string).collect())
    }

    pub async fn template_labels(&self) -> Result<Vec<String>, ChatError> {
        let table = self.templates.all().await?;
        Ok(table.labels().into_iter().map(str::to_string).collect())
    }

    pub async fn add_template(&self, label: &str, prompt: &str) -> Result<(), ChatError> {
        self.templates.put(label, prompt).await?;
        Ok(())
    }

    /// Models visible to the selected credential, or to the first stored one.
    pub async fn available_models(
        &self,
        credential_label: Option<&str>,
    ) -> Result<Vec<String>, ChatError> {
        let table = self.credentials.all().await?;
        let secret = match credential_label {
            Some(label) => table.lookup(label),
            None => table.first_value(),
        };

        match secret {
            Some(secret) => Ok(self.provider.list_models(&SecretString::new(secret)).await),
            None => Ok(Vec::new()),
        }
    }

    async fn lookup_template(&self, label: &TemplateLabel) -> Result<String, ChatError> {
        self.templates
            .get(label.as_str())
            .await?
            .ok_or_else(|| {
                ChatError::template_not_found(format!("prompt template '{label}' was not found"))
            })
    }

    async fn resolve_credential(
        &self,
        new_label: Option<String>,
        new_secret: Option<SecretString>,
        selected_label: Option<String>,
    ) -> Result<SecretString, ChatError> {
        let new_label = new_label.filter(|label| !label.trim().is_empty());
        let new_secret = new_secret.filter(|secret| !secret.is_empty());

        if let (Some(label), Some(secret)) = (new_label, new_secret) {
            self.credentials.put(&label, secret.expose()).await?;
            self.hooks.on_credential_resolved(&label, true);
            return Ok(secret);
        }

        let Some(label) = selected_label.filter(|label| !label.trim().is_empty()) else {
            return Err(ChatError::credential_not_found("no API key was selected"));
        };

        match self.credentials.get(&label).await? {
            Some(secret) => {
                self.hooks.on_credential_resolved(&label, false);
                Ok(SecretString::new(secret))
            }
            None => Err(ChatError::credential_not_found(format!(
                "no API key is stored under '{label}'"
            ))),
        }
    }

    async fn drain_pending(&self, outbound_message: &str) -> Result<usize, ChatError> {
        let outputs = self.pending.take()?;
        if outputs.is_empty() {
            return Ok(0);
        }

        match self.archive.archive(outbound_message, &outputs).await {
            Ok(rows) => {
                self.hooks.on_archived(rows);
                Ok(rows)
            }
            Err(error) => {
                self.pending.fill(outputs)?;
                Err(error.into())
            }
        }
    }
}
