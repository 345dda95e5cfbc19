//! Runtime configuration: table paths, provider endpoint, and model defaults.
//!
//! ```rust
//! use std::time::Duration;
//! use xerogen::RuntimeConfig;
//!
//! let config = RuntimeConfig::default()
//!     .with_base_url("http://localhost:8080/v1/")
//!     .with_request_timeout(Duration::from_secs(10));
//! assert_eq!(config.base_url, "http://localhost:8080/v1");
//! assert_eq!(config.default_model, "gpt-3.5-turbo");
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use xchat::ChatError;
use xprovider::DEFAULT_MODEL;

pub const CREDENTIALS_PATH_VAR: &str = "XEROGEN_CREDENTIALS_PATH";
pub const TEMPLATES_PATH_VAR: &str = "XEROGEN_TEMPLATES_PATH";
pub const ARCHIVE_PATH_VAR: &str = "XEROGEN_ARCHIVE_PATH";
pub const BASE_URL_VAR: &str = "XEROGEN_BASE_URL";
pub const DEFAULT_MODEL_VAR: &str = "XEROGEN_DEFAULT_MODEL";
pub const REQUEST_TIMEOUT_VAR: &str = "XEROGEN_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub credentials_path: PathBuf,
    pub templates_path: PathBuf,
    pub archive_path: PathBuf,
    pub base_url: String,
    pub default_model: String,
    pub request_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from("api_keys.csv"),
            templates_path: PathBuf::from("prompts.csv"),
            archive_path: PathBuf::from("chatgpt_responses.csv"),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(90),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ChatError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = value(CREDENTIALS_PATH_VAR) {
            config = config.with_credentials_path(path);
        }
        if let Some(path) = value(TEMPLATES_PATH_VAR) {
            config = config.with_templates_path(path);
        }
        if let Some(path) = value(ARCHIVE_PATH_VAR) {
            config = config.with_archive_path(path);
        }
        if let Some(url) = value(BASE_URL_VAR) {
            config = config.with_base_url(url);
        }
        if let Some(model) = value(DEFAULT_MODEL_VAR) {
            config = config.with_default_model(model.trim());
        }
        if let Some(raw) = value(REQUEST_TIMEOUT_VAR) {
            let seconds = raw.trim().parse::<u64>().map_err(|_| {
                ChatError::invalid_request(format!(
                    "{REQUEST_TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config = config.with_request_timeout(Duration::from_secs(seconds));
        }

        Ok(config)
    }

    pub fn with_credentials_path(mut self, path: impl AsRef<Path>) -> Self {
        self.credentials_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_templates_path(mut self, path: impl AsRef<Path>) -> Self {
        self.templates_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_archive_path(mut self, path: impl AsRef<Path>) -> Self {
        self.archive_path = path.as_ref().to_path_buf();
        self
    }

    /// Places all three tables under `dir` with their default file names.
    pub fn with_data_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.with_credentials_path(dir.join("api_keys.csv"))
            .with_templates_path(dir.join("prompts.csv"))
            .with_archive_path(dir.join("chatgpt_responses.csv"))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
