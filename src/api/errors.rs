use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dtos::ErrorResponse;
use crate::extractor::ExtractError;
use crate::generation::GenerationError;
use crate::normalizer::ValidationError;

pub const INVALID_BODY: &str = "invalid request body";
pub const FETCH_FAILED: &str = "failed to load article; check the URL and try again later";
pub const NO_ARTICLE_TEXT: &str = "could not extract article text; the page may not contain an article";
pub const GENERATION_FAILED: &str = "generation service error; try again later";
pub const TRANSLATE_CONTENT_REQUIRED: &str = "article text to translate is required";
pub const INTERNAL: &str = "internal server error";

/// Boundary error. The message is what the caller sees; the underlying
/// cause is logged by the handler before conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    BadGateway(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        if err.names_http_status() {
            Self::BadRequest(err.to_string())
        } else {
            Self::BadRequest(FETCH_FAILED.to_string())
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::ArticleTooShort | GenerationError::Configuration => {
                Self::Internal(err.to_string())
            }
            GenerationError::Upstream { .. } | GenerationError::EmptyResponse => {
                Self::BadGateway(err.to_string())
            }
            GenerationError::Transport(_) | GenerationError::Decode(_) => {
                Self::BadGateway(GENERATION_FAILED.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
