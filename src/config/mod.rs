//! Configuration handling for the application.
//!
//! Everything is read from environment variables once, at process start, and
//! then passed around explicitly. `Config::from_env` falls back to development
//! defaults for everything except the completion API credential, which has no
//! sensible default and is left empty.

use std::env;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Environment variable names. Public so tests and binaries can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_COMPLETION_URL: &str = "OPENROUTER_URL";
pub const ENV_MODEL: &str = "OPENROUTER_MODEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_COMPLETION_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

/// Shape of the log lines written by the binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason: format!("expected 'text' or 'json', got '{}'", other),
            }),
        }
    }
}

/// Application runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    api_key: Option<String>,
    completion_url: String,
    model: String,
    log_format: LogFormat,
}

impl Config {
    /// Create a new config explicitly. A blank key is treated as absent.
    pub fn new(
        bind_addr: impl Into<String>,
        api_key: Option<String>,
        completion_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            api_key: normalize_key(api_key),
            completion_url: completion_url.into(),
            model: model.into(),
            log_format: LogFormat::Text,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let api_key = normalize_key(env::var(ENV_API_KEY).ok());
        let completion_url =
            env::var(ENV_COMPLETION_URL).unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string());
        let model = env::var(ENV_MODEL)
            .ok()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };

        validate_completion_url(&completion_url)?;

        Ok(Self {
            bind_addr,
            api_key,
            completion_url,
            model,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Bearer credential for the completion API, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the credential or fails; the server calls this once at startup.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key().ok_or(ConfigError::Missing { field: ENV_API_KEY })
    }

    pub fn completion_url(&self) -> &str {
        &self.completion_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        // not `Default` impl yet to keep explicit semantics
        Self::new(DEFAULT_BIND_ADDR, None, DEFAULT_COMPLETION_URL, DEFAULT_MODEL)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("completion_url", &self.completion_url)
            .field("model", &self.model)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

fn validate_completion_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: ENV_COMPLETION_URL,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: ENV_COMPLETION_URL,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(())
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("'{field}' is not set")]
    Missing { field: &'static str },
}
