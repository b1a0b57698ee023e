use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// What one extraction call yields. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedArticle {
    pub date: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ParsedArticle {
    /// Length of the trimmed content in characters, zero when absent.
    pub fn content_chars(&self) -> usize {
        self.content
            .as_deref()
            .map(|c| char_len(c.trim()))
            .unwrap_or(0)
    }
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
