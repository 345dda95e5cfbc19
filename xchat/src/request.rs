//! Caller-facing orchestration request.

use xcommon::TemplateLabel;
use xprovider::SecretString;

use crate::Directive;

#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrateRequest {
    pub new_credential_label: Option<String>,
    pub new_credential_secret: Option<SecretString>,
    pub credential_label: Option<String>,
    pub template_label: TemplateLabel,
    pub message: String,
    pub model: Option<String>,
    pub directive: Directive,
    pub persist: bool,
}

impl OrchestrateRequest {
    pub fn new(template_label: impl Into<TemplateLabel>, message: impl Into<String>) -> Self {
        Self {
            new_credential_label: None,
            new_credential_secret: None,
            credential_label: None,
            template_label: template_label.into(),
            message: message.into(),
            model: None,
            directive: Directive::default(),
            persist: false,
        }
    }

    /// Stores `label`/`secret` and uses the secret for this exchange.
    pub fn with_new_credential(
        mut self,
        label: impl Into<String>,
        secret: impl Into<SecretString>,
    ) -> Self {
        self.new_credential_label = Some(label.into());
        self.new_credential_secret = Some(secret.into());
        self
    }

    pub fn with_credential(mut self, label: impl Into<String>) -> Self {
        self.credential_label = Some(label.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directive = directive;
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}
