use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header::ORIGIN},
};
use tracing::{error, info, warn};

use crate::{
    api::{
        dtos::{
            ErrorResponse, GenerateRequest, GenerateResponse, ParseRequest, ParseResponse,
            TranslateRequest, TranslateResponse,
        },
        errors::{ApiError, INVALID_BODY, NO_ARTICLE_TEXT, TRANSLATE_CONTENT_REQUIRED},
        request_id::CorrelationId,
    },
    app_state::AppState,
    extractor::model::char_len,
    generation::{GenerationRequest, client::MIN_ARTICLE_CHARS},
    normalizer::{normalize_url, parse_mode},
};

fn read_body<T>(
    request_id: &CorrelationId,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(request_id = %request_id, error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    })
}

fn caller_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
}

#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "articles",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated Russian text", body = GenerateResponse),
        (status = 400, description = "Invalid input or unreadable article", body = ErrorResponse),
        (status = 500, description = "Service misconfigured", body = ErrorResponse),
        (status = 502, description = "Completion API failed", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    request_id: CorrelationId,
    headers: HeaderMap,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let payload = read_body(&request_id, payload)?;

    let (url, mode) = normalize_url(payload.url.as_deref())
        .and_then(|url| Ok((url, parse_mode(payload.mode.as_deref())?)))
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Validation failed");
            ApiError::from(e)
        })?;

    info!(request_id = %request_id, url = %url, mode = %mode, "Generating");

    let article = state.articles.extract(&url).await.map_err(|e| {
        error!(request_id = %request_id, url = %url, error = %e, "Article extraction failed");
        ApiError::from(e)
    })?;

    let content = article.content.unwrap_or_default();
    if char_len(content.trim()) < MIN_ARTICLE_CHARS {
        error!(
            request_id = %request_id,
            content_length = char_len(&content),
            "Extracted content is too short"
        );
        return Err(ApiError::BadRequest(NO_ARTICLE_TEXT.to_string()));
    }

    let request = GenerationRequest {
        title: article.title,
        content,
        mode,
        origin: caller_origin(&headers),
    };

    let result = state.generator.generate(&request).await.map_err(|e| {
        error!(request_id = %request_id, mode = %mode, error = %e, "Generation failed");
        ApiError::from(e)
    })?;

    info!(
        request_id = %request_id,
        mode = %mode,
        result_length = char_len(&result),
        "Generated content"
    );
    Ok(Json(GenerateResponse { result }))
}

#[utoipa::path(
    post,
    path = "/api/parse",
    tag = "articles",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Extracted article fields", body = ParseResponse),
        (status = 400, description = "Invalid URL or unreadable article", body = ErrorResponse)
    )
)]
pub async fn parse(
    State(state): State<AppState>,
    request_id: CorrelationId,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let payload = read_body(&request_id, payload)?;

    let url = normalize_url(payload.url.as_deref()).map_err(|e| {
        error!(request_id = %request_id, error = %e, "Validation failed");
        ApiError::from(e)
    })?;

    let article = state.articles.extract(&url).await.map_err(|e| {
        error!(request_id = %request_id, url = %url, error = %e, "Article extraction failed");
        ApiError::from(e)
    })?;

    Ok(Json(ParseResponse::from(article)))
}

#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "articles",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Russian translation", body = TranslateResponse),
        (status = 400, description = "Missing content", body = ErrorResponse),
        (status = 500, description = "Service misconfigured", body = ErrorResponse),
        (status = 502, description = "Completion API failed", body = ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    request_id: CorrelationId,
    headers: HeaderMap,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let payload = read_body(&request_id, payload)?;

    let content = payload.content.unwrap_or_default();
    if content.trim().is_empty() {
        warn!(request_id = %request_id, "Translation requested without content");
        return Err(ApiError::BadRequest(TRANSLATE_CONTENT_REQUIRED.to_string()));
    }

    let translation = state
        .generator
        .translate(&content, caller_origin(&headers))
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Translation failed");
            ApiError::from(e)
        })?;

    Ok(Json(TranslateResponse { translation }))
}
