use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::extractor::model::char_len;
use crate::generation::{
    GenerationError, GenerationRequest, TextGenerator,
    prompt::{build_prompt, build_translation_prompt},
    types::{ChatMessage, ChatRequest, ChatResponse},
};

/// Articles shorter than this (trimmed) never reach the paid API.
pub const MIN_ARTICLE_CHARS: usize = 100;
pub const MODE_MAX_TOKENS: u32 = 2048;
pub const TRANSLATION_MAX_TOKENS: u32 = 8192;

const REFERER_HEADER: &str = "HTTP-Referer";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat-completion client. One POST per call, never retried.
#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GenerationClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        Self::new(
            config.completion_url(),
            config.model(),
            config.api_key().map(str::to_string),
        )
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key.as_deref().ok_or_else(|| {
            error!("Completion API key is not configured");
            GenerationError::Configuration
        })
    }

    async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        max_tokens: u32,
        origin: Option<&str>,
    ) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        };

        let mut request = self.http.post(&self.endpoint).bearer_auth(api_key).json(&body);
        if let Some(origin) = origin.map(str::trim).filter(|o| !o.is_empty()) {
            request = request.header(REFERER_HEADER, origin);
        }

        let response = request.send().await.inspect_err(|e| {
            error!("Completion API request failed: {}", e);
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Completion API returned an error");
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        let text = payload.first_text();
        if text.is_empty() {
            error!("Completion API returned an empty result");
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    #[instrument(skip_all, fields(mode = %request.mode))]
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if char_len(request.content.trim()) < MIN_ARTICLE_CHARS {
            return Err(GenerationError::ArticleTooShort);
        }

        let api_key = self.api_key()?;
        let prompt = build_prompt(request.title.as_deref(), &request.content, request.mode);

        info!(
            content_length = char_len(&request.content),
            title_length = request.title.as_deref().map_or(0, char_len),
            "Requesting completion"
        );

        let result = self
            .complete(api_key, &prompt, MODE_MAX_TOKENS, request.origin.as_deref())
            .await?;

        info!(result_length = char_len(&result), "Generated content");
        Ok(result)
    }

    #[instrument(skip_all)]
    async fn translate(
        &self,
        content: &str,
        origin: Option<String>,
    ) -> Result<String, GenerationError> {
        let api_key = self.api_key()?;
        let prompt = build_translation_prompt(content.trim());

        info!(content_length = char_len(content), "Requesting translation");

        let translation = self
            .complete(api_key, &prompt, TRANSLATION_MAX_TOKENS, origin.as_deref())
            .await?;

        info!(result_length = char_len(&translation), "Translated content");
        Ok(translation)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
