//! Validation of user-supplied article URLs and generation modes.

use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::generation::GenerationMode;

/// Bad or missing user input. Always the caller's fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("article URL is required")]
    UrlRequired,

    #[error("URL must start with http:// or https://")]
    UnsupportedScheme,

    #[error("invalid URL: missing domain")]
    MissingHost,

    #[error("invalid article URL")]
    InvalidUrl,

    #[error("generation mode is required")]
    ModeRequired,

    #[error("invalid generation mode '{0}'; use one of: summary, thesis, telegram")]
    InvalidMode(String),
}

/// Validates a raw URL and returns its canonical string form.
///
/// The parser's own diagnostic is logged and replaced by
/// [`ValidationError::InvalidUrl`].
pub fn normalize_url(raw: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::UrlRequired);
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        warn!(raw_url = %trimmed, error = %e, "Rejected unparsable URL");
        ValidationError::InvalidUrl
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed.to_string()),
        _ => Err(ValidationError::MissingHost),
    }
}

/// Validates a raw generation mode, case-insensitively.
pub fn parse_mode(raw: Option<&str>) -> Result<GenerationMode, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::ModeRequired);
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidMode(trimmed.to_string()))
}
