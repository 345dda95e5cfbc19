//! Conversation orchestration over a chat provider and durable label tables.
//!
//! ```rust
//! use xchat::{Directive, OrchestrateRequest};
//!
//! let request = OrchestrateRequest::new("haiku", "autumn")
//!     .with_credential("work")
//!     .with_directive(Directive::new().with_style())
//!     .with_persist(true);
//! assert_eq!(request.directive.transform(&request.message), "$style, autumn");
//! ```

mod directive;
mod error;
mod hooks;
mod orchestrator;
mod pending;
mod request;
mod session;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, Directive, Exchange, NoopOrchestrationHooks,
        OrchestrateRequest, OrchestrationHooks, Orchestrator, PendingOutputs, SessionPhase,
        SessionRegistry, SessionTransition,
    };
    pub use xcommon::TemplateLabel;
}

pub use directive::{Directive, LABEL_MARKER, STYLE_MARKER, TREND_MARKER};
pub use error::{ChatError, ChatErrorKind};
pub use hooks::{NoopOrchestrationHooks, OrchestrationHooks};
pub use orchestrator::{OUTPUT_SEPARATOR, Orchestrator};
pub use pending::PendingOutputs;
pub use request::OrchestrateRequest;
pub use session::{Exchange, SessionPhase, SessionRegistry, SessionTransition, outbound_turns};
pub use xcommon::TemplateLabel;
