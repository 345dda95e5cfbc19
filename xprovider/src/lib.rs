//! Provider-facing turn model, secrets, hooks, and the OpenAI-compatible adapter.
//!
//! ```rust
//! use xprovider::{CompletionRequest, Turn, promote_default_model, DEFAULT_MODEL};
//!
//! let request = CompletionRequest::new(DEFAULT_MODEL, vec![Turn::user("hello")]);
//! assert!(request.validate().is_ok());
//!
//! let mut models = vec!["gpt-4".to_string(), DEFAULT_MODEL.to_string()];
//! promote_default_model(&mut models, DEFAULT_MODEL);
//! assert_eq!(models[0], DEFAULT_MODEL);
//! ```

pub mod adapters;
mod credentials;
mod error;
mod hooks;
mod model;
pub mod prelude;
mod provider;

pub use credentials::SecretString;
pub use error::{ProviderError, ProviderErrorKind};
pub use hooks::{NoopOperationHooks, ProviderOperationHooks};
pub use model::{
    CompletionRequest, CompletionResult, DEFAULT_MODEL, Role, Turn, promote_default_model,
};
pub use provider::{ChatProvider, ProviderFuture};
