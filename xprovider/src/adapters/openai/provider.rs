//! OpenAI provider implementation over transport and shared models.

use std::sync::Arc;

use crate::{
    ChatProvider, CompletionRequest, CompletionResult, DEFAULT_MODEL, NoopOperationHooks,
    ProviderError, ProviderFuture, ProviderOperationHooks, SecretString, promote_default_model,
};

use super::transport::OpenAiTransport;
use super::types::{OpenAiAuth, OpenAiRequest};

#[derive(Clone)]
pub struct OpenAiProvider {
    transport: Arc<dyn OpenAiTransport>,
    hooks: Arc<dyn ProviderOperationHooks>,
    default_model: String,
}

impl OpenAiProvider {
    pub fn new(transport: Arc<dyn OpenAiTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopOperationHooks),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Converts the request to the wire model, substituting the default model when blank.
    pub(crate) fn build_openai_request(
        &self,
        mut request: CompletionRequest,
    ) -> Result<OpenAiRequest, ProviderError> {
        if request.model.trim().is_empty() {
            request.model = self.default_model.clone();
        }

        request.validate()?;
        Ok(OpenAiRequest::from(request))
    }

    fn resolve_auth(secret: &SecretString) -> Result<OpenAiAuth, ProviderError> {
        if secret.is_empty() {
            return Err(ProviderError::authentication("API key must not be empty"));
        }

        Ok(OpenAiAuth::bearer(secret))
    }

    async fn try_list_models(&self, secret: &SecretString) -> Result<Vec<String>, ProviderError> {
        let auth = Self::resolve_auth(secret)?;
        let engines = self.transport.list_engines(auth).await?;
        let mut models = engines.into_iter().map(|engine| engine.id).collect::<Vec<_>>();
        promote_default_model(&mut models, &self.default_model);
        Ok(models)
    }

    async fn try_complete(
        &self,
        secret: &SecretString,
        request: CompletionRequest,
    ) -> CompletionResult {
        let auth = Self::resolve_auth(secret)?;
        let openai_request = self.build_openai_request(request)?;
        let response = self.transport.complete(openai_request, auth).await?;
        Ok(response.content.trim().to_string())
    }
}

impl ChatProvider for OpenAiProvider {
    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn list_models<'a>(&'a self, secret: &'a SecretString) -> ProviderFuture<'a, Vec<String>> {
        Box::pin(async move {
            self.hooks.on_attempt_start("list_models");
            match self.try_list_models(secret).await {
                Ok(models) => {
                    self.hooks.on_success("list_models");
                    models
                }
                Err(error) => {
                    self.hooks.on_failure("list_models", &error);
                    Vec::new()
                }
            }
        })
    }

    fn complete<'a>(
        &'a self,
        secret: &'a SecretString,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, CompletionResult> {
        Box::pin(async move {
            self.hooks.on_attempt_start("complete");
            let result = self.try_complete(secret, request).await;

            match &result {
                Ok(_) => self.hooks.on_success("complete"),
                Err(error) => self.hooks.on_failure("complete", error),
            }
            result
        })
    }
}
