use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};
use url::Url;

use crate::api::dtos::{ErrorResponse, GenerateResponse, ParseResponse, TranslateResponse};
use crate::extractor::ParsedArticle;
use crate::generation::GenerationMode;
use crate::normalizer::{ValidationError, normalize_url};
use crate::presentation::Action;

const GENERATE_FALLBACK: &str = "could not generate content; try again later";
const PARSE_FALLBACK: &str = "could not parse the article; try another URL or try again later";
const TRANSLATE_FALLBACK: &str = "translation failed; try again later";

// Generation plus a slow article host can legitimately take a while.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Debug, Error)]
pub enum PresentationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid server URL: {0}")]
    InvalidServerUrl(#[from] url::ParseError),

    /// Non-success answer; the message is the server's own or a fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("error contacting the server; check your connection and try again")]
    Transport(#[from] reqwest::Error),

    #[error("could not extract article text for translation")]
    NothingToTranslate,
}

#[derive(Serialize)]
struct GenerateBody<'a> {
    url: &'a str,
    mode: GenerationMode,
}

#[derive(Serialize)]
struct ParseBody<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    content: &'a str,
}

/// HTTP client for a running `api` server.
#[derive(Debug, Clone)]
pub struct ReferentClient {
    http: Client,
    base_url: Url,
}

impl ReferentClient {
    pub fn new(base_url: &str) -> Result<Self, PresentationError> {
        let http = Client::builder().timeout(CLIENT_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Validates the URL locally, then runs the action against the server.
    /// Translation chains a parse call and a translate call.
    #[instrument(skip(self, action), fields(action = %action))]
    pub async fn run(&self, action: Action, raw_url: &str) -> Result<String, PresentationError> {
        let url = normalize_url(Some(raw_url))?;

        match action.mode() {
            Some(mode) => self.generate(&url, mode).await,
            None => {
                let article = self.parse(&url).await?;
                let text =
                    translation_input(&article).ok_or(PresentationError::NothingToTranslate)?;
                self.translate(&text).await
            }
        }
    }

    pub async fn generate(
        &self,
        url: &str,
        mode: GenerationMode,
    ) -> Result<String, PresentationError> {
        let response: GenerateResponse = self
            .post("api/generate", &GenerateBody { url, mode }, GENERATE_FALLBACK)
            .await?;
        Ok(response.result)
    }

    pub async fn parse(&self, url: &str) -> Result<ParsedArticle, PresentationError> {
        let response: ParseResponse = self
            .post("api/parse", &ParseBody { url }, PARSE_FALLBACK)
            .await?;
        Ok(ParsedArticle {
            date: response.date,
            title: response.title,
            content: response.content,
        })
    }

    pub async fn translate(&self, content: &str) -> Result<String, PresentationError> {
        let response: TranslateResponse = self
            .post("api/translate", &TranslateBody { content }, TRANSLATE_FALLBACK)
            .await?;
        Ok(response.translation)
    }

    async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, PresentationError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = self.base_url.join(path)?;
        debug!(endpoint = %endpoint, "Calling server");

        let response = self.http.post(endpoint).json(body).send().await?;
        if !response.status().is_success() {
            return Err(server_error(response, fallback).await);
        }
        Ok(response.json().await?)
    }
}

async fn server_error(response: Response, fallback: &str) -> PresentationError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|payload| payload.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    error!(status, error = %message, "Server returned an error");
    PresentationError::Server { status, message }
}

/// Title and content joined by a blank line, or `None` if both are empty.
pub fn translation_input(article: &ParsedArticle) -> Option<String> {
    let text = [article.title.as_deref(), article.content.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    (!text.trim().is_empty()).then_some(text)
}
