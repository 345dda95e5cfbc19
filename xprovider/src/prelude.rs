//! Common `xprovider` imports for downstream crates.

pub use crate::{
    ChatProvider, CompletionRequest, CompletionResult, DEFAULT_MODEL, NoopOperationHooks,
    ProviderError, ProviderErrorKind, ProviderFuture, ProviderOperationHooks, Role, SecretString,
    Turn,
};
pub use xcommon::BoxFuture;
