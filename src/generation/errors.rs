use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("article is too short to process")]
    ArticleTooShort,

    #[error("generation service is not configured: missing API key")]
    Configuration,

    #[error("generation service error ({status}); try again later")]
    Upstream { status: u16 },

    #[error("generation service returned an empty result")]
    EmptyResponse,

    #[error("generation service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unreadable response from generation service: {0}")]
    Decode(String),
}

impl GenerationError {
    /// Failures that mean the deployment itself is broken rather than the
    /// completion API being unavailable.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::ArticleTooShort | Self::Configuration)
    }
}
