pub mod client;
pub mod errors;
pub mod prompt;
pub mod types;

pub use client::GenerationClient;
pub use errors::GenerationError;
pub use prompt::{build_prompt, build_translation_prompt};
pub use types::{GenerationMode, GenerationRequest};

use async_trait::async_trait;

/// The completion-backed text transformations the handlers rely on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produces the `mode`-shaped Russian derivative of an article.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Translates article text into Russian.
    async fn translate(&self, content: &str, origin: Option<String>)
    -> Result<String, GenerationError>;

    /// Whether a credential is present, without touching the network.
    fn is_configured(&self) -> bool;
}
