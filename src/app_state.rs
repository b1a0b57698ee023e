use std::sync::Arc;

use crate::config::Config;
use crate::extractor::{ArticleExtractor, ArticleSource};
use crate::generation::{GenerationClient, GenerationError, TextGenerator};

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleSource>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(articles: Arc<dyn ArticleSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            articles,
            generator,
        }
    }

    /// Production wiring: live page fetches and the configured completion API.
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        Ok(Self::new(
            Arc::new(ArticleExtractor),
            Arc::new(GenerationClient::from_config(config)?),
        ))
    }
}
