pub mod content;
pub mod dom;
pub mod metadata;
pub mod model;

#[cfg(test)]
mod tests;

pub use model::ParsedArticle;

use async_trait::async_trait;
use scraper::Html;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::fetcher::{FetchError, fetch, types::PageResponse};

/// Bodies with more replacement characters than this are not text.
const MAX_REPLACEMENT_RATIO: f64 = 0.1;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to parse article: {0}")]
    Parse(String),
}

impl ExtractError {
    pub fn names_http_status(&self) -> bool {
        matches!(self, Self::Fetch(fetch_error) if fetch_error.names_http_status())
    }
}

/// Anything that can turn an article URL into a [`ParsedArticle`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ParsedArticle, ExtractError>;
}

/// Downloads the page over HTTP and runs the extraction heuristic on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleExtractor;

#[async_trait]
impl ArticleSource for ArticleExtractor {
    async fn extract(&self, url: &str) -> Result<ParsedArticle, ExtractError> {
        extract(url).await
    }
}

#[instrument(skip_all, fields(url = %url))]
pub async fn extract(url: &str) -> Result<ParsedArticle, ExtractError> {
    info!("Parsing article");

    let page = fetch(url).await.inspect_err(|e| {
        error!("Failed to fetch article: {}", e);
    })?;

    let article = parse_page(&page)?;

    info!(
        has_date = article.date.is_some(),
        has_title = article.title.is_some(),
        content_length = article.content_chars(),
        "Parsed article"
    );
    Ok(article)
}

/// Runs extraction on an already downloaded page.
pub fn parse_page(page: &PageResponse) -> Result<ParsedArticle, ExtractError> {
    if page.replacement_ratio > MAX_REPLACEMENT_RATIO {
        return Err(ExtractError::Parse(format!(
            "response body from {} is not decodable text",
            page.url_final
        )));
    }
    Ok(parse_document(&page.body_utf8))
}

/// Extracts date, title and main text from raw HTML. Never fails: the
/// parser recovers from any markup.
pub fn parse_document(html: &str) -> ParsedArticle {
    let mut document = Html::parse_document(html);

    let date = metadata::extract_date(&document);
    let title = metadata::extract_title(&document);
    let content = content::extract_main_content(&mut document);

    ParsedArticle {
        date,
        title,
        content,
    }
}
