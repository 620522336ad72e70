//! DOM Helpers
//!
//! Thin adapter over the `dom_query` crate: attribute access, tag checks and
//! the bounded tree walks the share-link associator relies on. Every walk
//! returns an owned sequence of nodes instead of mutating a cursor.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Elements whose text is never visible on the rendered page.
pub const HIDDEN_TEXT_TAGS: &[&str] = &["head", "script", "style", "noscript", "template", "title"];

/// Elements that delimit a paragraph of text.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "td", "th", "dd", "dt", "pre", "blockquote", "section", "article",
    "h1", "h2", "h3", "h4", "h5", "h6", "body",
];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Root `<html>` element of a parsed document.
///
/// The HTML5 parser always synthesizes one, so this is `None` only for
/// documents built by hand.
#[must_use]
pub fn document_root(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("html").nodes().first().copied()
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value of a single node.
#[inline]
#[must_use]
pub fn node_attribute(node: NodeRef<'_>, name: &str) -> Option<String> {
    get_attribute(&Selection::from(node), name)
}

/// Whitespace-separated tokens of the `class` attribute, lowercased.
#[must_use]
pub fn class_tokens(node: NodeRef<'_>) -> Vec<String> {
    node_attribute(node, "class")
        .map(|class| class.split_whitespace().map(str::to_lowercase).collect())
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Lowercase tag name of an element node.
#[must_use]
pub fn tag_name(node: NodeRef<'_>) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether `node` is an element with one of the given tag names.
#[must_use]
pub fn is_tag(node: NodeRef<'_>, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Whether a node sits inside an element whose text is not rendered.
#[must_use]
pub fn is_hidden(node: NodeRef<'_>) -> bool {
    ancestors(node).into_iter().any(|anc| is_tag(anc, HIDDEN_TEXT_TAGS))
}

// === Tree Navigation ===

/// Ancestors of `node`, nearest first, excluding the node itself.
#[must_use]
pub fn ancestors(node: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut out = Vec::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        out.push(parent);
        current = parent.parent();
    }
    out
}

/// Nearest ancestor that is an element (skips the document node).
#[must_use]
pub fn parent_element(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    node.parent().filter(NodeRef::is_element)
}

/// Nearest block-level ancestor, used as the paragraph around a text node.
#[must_use]
pub fn nearest_block(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    ancestors(node).into_iter().find(|anc| is_tag(*anc, BLOCK_TAGS))
}

/// Up to `limit` element siblings following `node`, in document order.
///
/// Text nodes between elements are skipped, matching how siblings are
/// counted when looking for a password paragraph after a link paragraph.
#[must_use]
pub fn next_element_siblings(node: NodeRef<'_>, limit: usize) -> Vec<NodeRef<'_>> {
    let mut out = Vec::with_capacity(limit);
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if out.len() >= limit {
            break;
        }
        if s.is_element() {
            out.push(s);
        }
        sibling = s.next_sibling();
    }
    out
}

/// All element nodes with the given tag, in document order.
#[must_use]
pub fn elements_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<NodeRef<'a>> {
    doc.select(tag).nodes().to_vec()
}
