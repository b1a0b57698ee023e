use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::extractor::ParsedArticle;

/// Fields are optional so that a missing value is reported as a validation
/// error rather than a body rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[schema(example = "https://example.com/blog/post")]
    pub url: Option<String>,
    #[schema(example = "summary")]
    pub mode: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ParseRequest {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TranslateRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParseResponse {
    pub date: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<ParsedArticle> for ParseResponse {
    fn from(article: ParsedArticle) -> Self {
        Self {
            date: article.date,
            title: article.title,
            content: article.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
