use std::fs;
use url::Url;

use crate::extractor::content::TRUNCATION_MARKER;
use crate::extractor::{ExtractError, parse_document, parse_page};
use crate::fetcher::types::{Charset, PageResponse};

#[test]
fn test_extract_article() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let article = parse_page(&create_test_response(html, "https://example.com/article")).unwrap();

    assert_eq!(
        article.title.as_deref(),
        Some("Sample Article About Tidal Energy")
    );
    assert_eq!(article.date.as_deref(), Some("2024-05-14T08:30:00Z"));

    let content = article.content.unwrap();
    assert!(content.contains("first paragraph"));
    assert!(content.contains("second paragraph"));
    assert!(content.contains("Predictability is the real selling point"));
    assert!(content.contains("What comes next"));
    assert!(content.contains("Cheaper subsea cabling."));
    assert!(!content.contains("Share this"));
    assert!(!content.contains("Related:"));
    assert!(!content.contains("Great article"));
    assert!(!content.contains("Copyright"));
    assert!(!content.contains("World"));
    assert!(!content.contains("analytics"));
}

#[test]
fn test_extract_blog_post_with_div_markup() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/blog.html")
        .expect("Failed to read test fixture");

    let article = parse_document(&html);

    assert_eq!(article.title.as_deref(), Some("How to Build Better Software"));
    assert_eq!(article.date.as_deref(), Some("2023-11-02"));

    let content = article.content.unwrap();
    assert!(content.contains("Building better software"));
    assert!(content.contains("Key Principles for teams of every size"));
    assert!(content.contains("Small, reviewable changes"));
    assert!(content.contains("Automated tests are the safety net"));
    assert!(content.contains("cargo test --all-features"));
    assert!(!content.contains("Subscribe"));
    assert!(!content.contains("Popular posts"));
}

#[test]
fn test_page_without_article_text() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/empty.html")
        .expect("Failed to read test fixture");

    let article = parse_document(&html);

    // The heading is read before page chrome is stripped.
    assert_eq!(article.title.as_deref(), Some("Site"));
    assert_eq!(article.date, None);
    assert_eq!(article.content, None);
}

#[test]
fn test_minimal_valid_content() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Valid Article</title></head><body><article><h1>Valid Article</h1><p>{}</p></article></body></html>"#,
        "This is a valid article with enough content to pass the minimum requirements for extraction. ".repeat(20)
    );

    let article = parse_document(&html);

    assert_eq!(article.title.as_deref(), Some("Valid Article"));
    assert!(article.content_chars() > 250);
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";

    let article = parse_document(html);

    assert_eq!(article.title.as_deref(), Some("Broken"));
    let content = article.content.unwrap_or_default();
    assert!(content.contains("Unclosed tags"));
}

#[test]
fn test_huge_page_is_truncated_once() {
    let paragraph = "<p>Paragraph text repeated to push the article far beyond the size limit.</p>";
    let html = format!("<html><body><article>{}</article></body></html>", paragraph.repeat(400));

    let content = parse_document(&html).content.unwrap();

    assert_eq!(content.matches(TRUNCATION_MARKER).count(), 1);
    assert!(content.ends_with(TRUNCATION_MARKER));
}

#[test]
fn test_binary_body_is_a_parse_error() {
    let mut response = create_test_response(String::new(), "https://example.com/image.png");
    response.replacement_ratio = 0.6;

    let result = parse_page(&response);

    assert!(matches!(result, Err(ExtractError::Parse(_))));
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        body_utf8: html,
        charset: Charset::Utf8,
        replacement_ratio: 0.0,
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = parse_document(&html);
        }

        #[test]
        fn test_extract_never_panics_on_tag_soup(
            parts in proptest::collection::vec(
                prop_oneof![
                    Just("<div>".to_string()),
                    Just("</div>".to_string()),
                    Just("<p>".to_string()),
                    Just("<article>".to_string()),
                    Just("</nav>".to_string()),
                    Just("<main class=\"content\">".to_string()),
                    "[a-zA-Z ]{0,40}",
                ],
                0..64,
            )
        ) {
            let html = parts.concat();
            if let Some(content) = parse_document(&html).content {
                prop_assert!(!content.is_empty());
                prop_assert!(content.matches(TRUNCATION_MARKER).count() <= 1);
            }
        }
    }
}
