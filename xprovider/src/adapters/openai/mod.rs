mod provider;
mod serde_api;
mod tests;
mod transport;
mod types;

pub use provider::OpenAiProvider;
pub use serde_api::{parse_completion_body, parse_engine_list_body};
pub use transport::{OpenAiHttpTransport, OpenAiTransport};
pub use types::{OpenAiAuth, OpenAiEngine, OpenAiMessage, OpenAiRequest, OpenAiResponse, OpenAiRole};
