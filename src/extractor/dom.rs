//! Thin query layer over the `scraper` tree.
//!
//! Elements are identified by their node id, which stays stable for the
//! lifetime of the parsed document even after subtrees are detached.
//! Detached nodes stay in the arena, so every query here starts from the
//! root element and only sees the attached tree.

use scraper::{ElementRef, Html, Selector, element_ref::Select};

use crate::extractor::model::normalize_whitespace;

/// Compiles a list of CSS selectors known at build time.
pub(crate) fn compile_all(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|css| Selector::parse(css).expect("static selector must be valid"))
        .collect()
}

pub(crate) fn compile(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must be valid")
}

/// Detaches every element matching `selector` from the tree.
pub fn remove_matching(document: &mut Html, selector: &Selector) -> usize {
    let ids: Vec<_> = select_attached(document, selector).map(|el| el.id()).collect();
    for id in &ids {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }
    ids.len()
}

/// Matches of `selector` reachable from the root element.
pub fn select_attached<'a, 'b>(document: &'a Html, selector: &'b Selector) -> Select<'a, 'b> {
    document.root_element().select(selector)
}

/// First attached match of `selector`.
pub fn first<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    select_attached(document, selector).next()
}

/// Typed text and traversal queries on an element.
pub trait ElementText<'a> {
    /// All descendant text, whitespace-collapsed and trimmed.
    fn rendered_text(&self) -> String;

    /// All descendant text with only the outer whitespace trimmed.
    fn trimmed_text(&self) -> String;

    /// Only the text nodes that are direct children, whitespace-collapsed
    /// and trimmed.
    fn own_text(&self) -> String;

    /// Strict descendants matching `selector`, in document order.
    fn descendants_matching(&self, selector: &Selector) -> Vec<ElementRef<'a>>;

    fn has_descendant(&self, selector: &Selector) -> bool;

    fn attr_trimmed(&self, name: &str) -> Option<String>;
}

impl<'a> ElementText<'a> for ElementRef<'a> {
    fn rendered_text(&self) -> String {
        normalize_whitespace(&self.text().collect::<String>())
    }

    fn trimmed_text(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn own_text(&self) -> String {
        let raw: String = self
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect();
        normalize_whitespace(&raw)
    }

    fn descendants_matching(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        let root = self.id();
        self.select(selector).filter(|el| el.id() != root).collect()
    }

    fn has_descendant(&self, selector: &Selector) -> bool {
        let root = self.id();
        self.select(selector).any(|el| el.id() != root)
    }

    fn attr_trimmed(&self, name: &str) -> Option<String> {
        self.value()
            .attr(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}
