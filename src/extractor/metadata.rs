//! Publication date and title lookups. Both run before noise removal so
//! that headings inside `<header>` still count.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::extractor::dom::{ElementText, compile, compile_all, first, select_attached};

/// Checked in order before any `<time>` element.
const META_DATE: &[&str] = &[
    "meta[property=\"article:published_time\"]",
    "meta[property=\"og:published_time\"]",
    "meta[name=\"article:published_time\"]",
    "meta[name=\"pubdate\"]",
    "meta[name=\"date\"]",
    "meta[itemprop=\"datePublished\"]",
];

static META_DATE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile_all(META_DATE));
static TIME: LazyLock<Selector> = LazyLock::new(|| compile("time"));
static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| compile("meta[property=\"og:title\"]"));
static H1: LazyLock<Selector> = LazyLock::new(|| compile("h1"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| compile("title"));

/// Every date-looking string on the page, trimmed, deduplicated, in
/// priority order. Values are passed through without parsing.
pub fn date_candidates(document: &Html) -> Vec<String> {
    let mut raw: Vec<String> = Vec::new();

    for selector in META_DATE_SELECTORS.iter() {
        if let Some(value) = first(document, selector).and_then(|el| el.value().attr("content")) {
            raw.push(value.to_string());
        }
    }

    for time in select_attached(document, &TIME) {
        if let Some(datetime) = time.value().attr("datetime") {
            raw.push(datetime.to_string());
        }
        raw.push(time.text().collect());
    }

    let mut candidates: Vec<String> = Vec::new();
    for value in raw {
        let value = value.trim();
        if !value.is_empty() && !candidates.iter().any(|seen| seen == value) {
            candidates.push(value.to_string());
        }
    }
    candidates
}

pub fn extract_date(document: &Html) -> Option<String> {
    date_candidates(document).into_iter().next()
}

/// `og:title`, then the first `<h1>`, then `<title>`. Heading and title
/// text is trimmed but keeps its inner whitespace.
pub fn extract_title(document: &Html) -> Option<String> {
    if let Some(og_title) = first(document, &OG_TITLE).and_then(|el| el.attr_trimmed("content")) {
        return Some(og_title);
    }

    [&*H1, &*TITLE]
        .into_iter()
        .filter_map(|selector| first(document, selector))
        .map(|el| el.trimmed_text())
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_priority_and_dedup() {
        let html = r#"<html><head>
            <meta name="date" content="2024-03-01">
            <meta property="article:published_time" content=" 2024-02-29T10:00:00Z ">
            <meta name="pubdate" content="2024-02-29T10:00:00Z">
            </head><body>
            <time datetime="2024-03-05">March 5</time>
            <time datetime="2024-03-01">2024-03-05</time>
            </body></html>"#;
        let document = Html::parse_document(html);

        assert_eq!(
            date_candidates(&document),
            vec!["2024-02-29T10:00:00Z", "2024-03-01", "2024-03-05", "March 5"]
        );
        assert_eq!(
            extract_date(&document),
            Some("2024-02-29T10:00:00Z".to_string())
        );
    }

    #[test]
    fn test_date_from_time_element_only() {
        let html = "<body><p>Posted <time>  yesterday </time></p></body>";
        let document = Html::parse_document(html);
        assert_eq!(extract_date(&document), Some("yesterday".to_string()));
    }

    #[test]
    fn test_date_from_microdata() {
        let html = r#"<head><meta itemprop="datePublished" content="2023-12-24"></head>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_date(&document), Some("2023-12-24".to_string()));
    }

    #[test]
    fn test_no_date_returns_none() {
        let document = Html::parse_document("<html><body><p>No dates</p><time> </time></body></html>");
        assert!(date_candidates(&document).is_empty());
        assert_eq!(extract_date(&document), None);
    }

    #[test]
    fn test_title_prefers_og_title() {
        let html = r#"<head><title>Doc title</title><meta property="og:title" content="  OG title "></head>
                      <body><h1>Heading</h1></body>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document), Some("OG title".to_string()));
    }

    #[test]
    fn test_title_falls_back_to_h1_then_title() {
        let document = Html::parse_document(
            r#"<head><title>Doc title</title><meta property="og:title" content=" "></head>
               <body><h1>  First heading </h1><h1>Second</h1></body>"#,
        );
        assert_eq!(extract_title(&document), Some("First heading".to_string()));

        let document =
            Html::parse_document("<head><title> Doc title </title></head><body><h1> </h1></body>");
        assert_eq!(extract_title(&document), Some("Doc title".to_string()));
    }

    #[test]
    fn test_title_keeps_inner_whitespace() {
        let document = Html::parse_document(
            "<body><h1>\n  Breaking:\n  <span>Tidal   power</span>  \n</h1></body>",
        );
        assert_eq!(
            extract_title(&document),
            Some("Breaking:\n  Tidal   power".to_string())
        );

        let document = Html::parse_document("<head><title> Doc \t title </title></head>");
        assert_eq!(extract_title(&document), Some("Doc \t title".to_string()));
    }

    #[test]
    fn test_title_absent() {
        let document = Html::parse_document("<html><body><p>text</p></body></html>");
        assert_eq!(extract_title(&document), None);
    }
}
