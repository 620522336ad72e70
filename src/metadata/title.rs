//! Title Extraction
//!
//! Ordered fallback chain: `<title>`, first `<h1>`, meta titles, placeholder.
//! The first non-empty candidate wins. A missing title is never an error.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::META_TITLE_SELECTORS;
use crate::Options;

/// Extract the article title.
///
/// Always returns a non-empty string: when every source is absent or blank,
/// `opts.untitled` is returned.
#[must_use]
pub fn extract_title(doc: &Document, opts: &Options) -> String {
    title_element(doc)
        .or_else(|| first_heading(doc))
        .or_else(|| meta_title(doc))
        .unwrap_or_else(|| opts.untitled.clone())
}

/// Trimmed text of the document's `<title>` element.
#[must_use]
pub fn title_element(doc: &Document) -> Option<String> {
    first_text(doc, "title")
}

/// Trimmed text of the first `<h1>`.
#[must_use]
pub fn first_heading(doc: &Document) -> Option<String> {
    first_text(doc, "h1")
}

/// Content of the first non-empty `og:title` or equivalent meta title.
#[must_use]
pub fn meta_title(doc: &Document) -> Option<String> {
    META_TITLE_SELECTORS.iter().find_map(|selector| {
        doc.select(selector)
            .nodes()
            .iter()
            .filter_map(|node| dom::node_attribute(*node, "content"))
            .map(|content| content.trim().to_string())
            .find(|content| !content.is_empty())
    })
}

fn first_text(doc: &Document, tag: &str) -> Option<String> {
    let node = doc.select(tag).nodes().first().copied()?;
    let text = dom::text_content(&Selection::from(node)).trim().to_string();
    (!text.is_empty()).then_some(text)
}
