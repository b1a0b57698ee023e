//! Main-content heuristic: strip boilerplate, score likely containers by the
//! amount of text they yield, then fall back to `<main>`/`<body>` and finally
//! to a flat scan of every text block in the body.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::extractor::dom::{
    ElementText, compile, compile_all, first, remove_matching, select_attached,
};
use crate::extractor::model::char_len;

/// Text shorter than this from the winning container triggers the fallbacks.
pub const MIN_CONTENT_CHARS: usize = 200;
/// Generic blocks and fallback fragments must be longer than this.
pub const MIN_FRAGMENT_CHARS: usize = 20;
pub const MAX_CONTENT_CHARS: usize = 20_000;
pub const TRUNCATION_MARKER: &str = "[контент обрезан]";

const FRAGMENT_SEPARATOR: &str = "\n\n";

const NOISE: &[&str] = &[
    "script",
    "style",
    "noscript",
    "template",
    "header",
    "footer",
    "nav",
    "aside",
    "[role=\"navigation\"]",
    "[role=\"complementary\"]",
    "[role=\"menu\"]",
    ".sidebar",
    "#sidebar",
    ".comments",
    "#comments",
    ".share",
    ".social",
    ".breadcrumbs",
    ".breadcrumb",
    ".menu",
    ".navigation",
    ".footer",
    ".header",
];

/// Ordered; earlier selectors win ties.
const CONTAINERS: &[&str] = &[
    "main",
    "article",
    "[role=\"article\"]",
    "[role=\"main\"]",
    ".post",
    ".post-content",
    ".article",
    ".article-body",
    ".entry-content",
    ".content",
    ".main-content",
    ".page-content",
    ".post-body",
    "#content",
    "#main",
    "#article",
];

const CHROME_CLASS_MARKERS: &[&str] = &["nav", "menu", "header", "footer", "sidebar"];

static NOISE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile(&NOISE.join(", ")));
static CONTAINER_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile_all(CONTAINERS));
static TEXT_BLOCKS: LazyLock<Selector> =
    LazyLock::new(|| compile("p, li, h1, h2, h3, h4, h5, h6, blockquote, pre, code, div"));
static SEMANTIC_TEXT: LazyLock<Selector> =
    LazyLock::new(|| compile("p, li, h1, h2, h3, h4, h5, h6"));
static FALLBACK_BLOCKS: LazyLock<Selector> =
    LazyLock::new(|| compile("p, li, h1, h2, h3, h4, h5, h6, div"));
static MAIN: LazyLock<Selector> = LazyLock::new(|| compile("main"));
static BODY: LazyLock<Selector> = LazyLock::new(|| compile("body"));

/// A subtree hypothesised to hold the article, with the text it yields.
#[derive(Debug)]
pub struct CandidateContainer<'a> {
    pub element: ElementRef<'a>,
    pub text: String,
    pub length: usize,
}

impl<'a> CandidateContainer<'a> {
    pub fn evaluate(element: ElementRef<'a>) -> Self {
        let text = extract_text_from_element(element);
        let length = char_len(&text);
        Self {
            element,
            text,
            length,
        }
    }
}

/// Removes scripts, page chrome and social/comment widgets in place.
pub fn strip_noise(document: &mut Html) -> usize {
    remove_matching(document, &NOISE_SELECTOR)
}

/// Collects readable fragments under `root` and joins them with blank lines.
///
/// A `<div>` contributes its own direct text when that exceeds
/// [`MIN_FRAGMENT_CHARS`]; otherwise it contributes its full text only if it
/// has no paragraph, list item or heading inside, which are picked up on
/// their own.
pub fn extract_text_from_element(root: ElementRef<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();

    for node in root.descendants_matching(&TEXT_BLOCKS) {
        if node.value().name() == "div" {
            let direct = node.own_text();
            if char_len(&direct) > MIN_FRAGMENT_CHARS {
                parts.push(direct);
            } else if !node.has_descendant(&SEMANTIC_TEXT) {
                let text = node.rendered_text();
                if char_len(&text) > MIN_FRAGMENT_CHARS {
                    parts.push(text);
                }
            }
        } else {
            let part = node.rendered_text();
            if !part.is_empty() {
                parts.push(part);
            }
        }
    }

    parts.join(FRAGMENT_SEPARATOR).trim().to_string()
}

/// Picks the container yielding the most text. Each element is scored once,
/// and the first one found keeps a tie.
pub fn best_container(document: &Html) -> Option<CandidateContainer<'_>> {
    let mut seen = HashSet::new();
    let mut best: Option<CandidateContainer<'_>> = None;

    for selector in CONTAINER_SELECTORS.iter() {
        for element in select_attached(document, selector) {
            if !seen.insert(element.id()) {
                continue;
            }
            let candidate = CandidateContainer::evaluate(element);
            let best_length = best.as_ref().map_or(0, |b| b.length);
            if candidate.length > best_length {
                best = Some(candidate);
            }
        }
    }

    if let Some(winner) = &best {
        debug!(
            "Best container <{}> yielded {} chars",
            winner.element.value().name(),
            winner.length
        );
    }
    best
}

fn is_short(text: &Option<String>) -> bool {
    text.as_deref().is_none_or(|t| char_len(t) < MIN_CONTENT_CHARS)
}

fn longer_than(candidate: &str, current: &Option<String>) -> bool {
    char_len(candidate) > current.as_deref().map_or(0, char_len)
}

fn has_chrome_class(element: &ElementRef<'_>) -> bool {
    let class = element.value().attr("class").unwrap_or_default().to_lowercase();
    CHROME_CLASS_MARKERS
        .iter()
        .any(|marker| class.contains(marker))
}

fn scan_body_blocks(document: &Html) -> String {
    let Some(body) = first(document, &BODY) else {
        return String::new();
    };

    body.descendants_matching(&FALLBACK_BLOCKS)
        .into_iter()
        .filter(|node| !has_chrome_class(node))
        .map(|node| node.rendered_text())
        .filter(|part| char_len(part) > MIN_FRAGMENT_CHARS)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
        .trim()
        .to_string()
}

/// Cuts `text` to [`MAX_CONTENT_CHARS`] characters and appends the marker.
pub fn truncate(text: String) -> String {
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => format!("{}{}{}", &text[..cut], FRAGMENT_SEPARATOR, TRUNCATION_MARKER),
        None => text,
    }
}

/// Runs the full heuristic. Mutates `document` by stripping noise first.
pub fn extract_main_content(document: &mut Html) -> Option<String> {
    let removed = strip_noise(document);
    debug!("Removed {} noise elements", removed);
    let document = &*document;

    let mut text = best_container(document)
        .filter(|winner| winner.length > 0)
        .map(|winner| winner.text);

    if is_short(&text) {
        for selector in [&*MAIN, &*BODY] {
            if let Some(element) = first(document, selector) {
                let candidate = extract_text_from_element(element);
                if longer_than(&candidate, &text) {
                    text = Some(candidate);
                }
            }
        }
    }

    if is_short(&text) {
        let scanned = scan_body_blocks(document);
        if longer_than(&scanned, &text) {
            text = Some(scanned);
        }
    }

    let text = text.filter(|t| !t.is_empty()).map(truncate);

    let preview: String = text.as_deref().unwrap_or_default().chars().take(100).collect();
    info!(
        length = text.as_deref().map_or(0, char_len),
        preview = %preview,
        "Extracted main content"
    );

    text
}
