//! Tag Extraction
//!
//! Tags are collected from three sources in priority order and concatenated:
//! meta keywords, `article:tag` meta properties, then tag-styled links in the
//! page body. Later exact duplicates are dropped.

use dom_query::{Document, NodeRef, Selection};

use crate::dom;
use crate::patterns::{KEYWORD_SEPARATOR, TAG_CLASS_MARKERS, TAG_META_PROPERTIES, TAG_REL_VALUES};

/// Elements that can carry a tag link.
const TAG_ELEMENT_NAMES: &[&str] = &["a", "span"];

/// Whether an element is a tag link.
///
/// True for `<a>`/`<span>` elements with a class token containing one of
/// [`TAG_CLASS_MARKERS`] (case-insensitive), or with a `rel` token in
/// [`TAG_REL_VALUES`].
#[must_use]
pub fn is_tag_element(node: NodeRef<'_>) -> bool {
    if !dom::is_tag(node, TAG_ELEMENT_NAMES) {
        return false;
    }

    let class_match = dom::class_tokens(node)
        .iter()
        .any(|token| TAG_CLASS_MARKERS.iter().any(|marker| token.contains(marker)));

    let rel_match = dom::node_attribute(node, "rel").is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| TAG_REL_VALUES.iter().any(|v| token.eq_ignore_ascii_case(v)))
    });

    class_match || rel_match
}

/// Extract tags in source-priority order.
#[must_use]
pub fn extract_tags(doc: &Document) -> Vec<String> {
    let mut tags = Vec::new();

    for keyword in meta_keywords(doc) {
        push_unique(&mut tags, &keyword);
    }
    for tag in meta_tag_properties(doc) {
        push_unique(&mut tags, &tag);
    }
    for tag in tag_links(doc) {
        push_unique(&mut tags, &tag);
    }

    tags
}

/// Keywords from `<meta name="keywords">`, split on ASCII and full-width
/// separators.
#[must_use]
pub fn meta_keywords(doc: &Document) -> Vec<String> {
    meta_contents(doc, |name, _| name.eq_ignore_ascii_case("keywords"))
        .iter()
        .flat_map(|content| KEYWORD_SEPARATOR.split(content).map(str::to_string).collect::<Vec<_>>())
        .collect()
}

/// One tag per `article:tag` / `og:tag` meta element.
#[must_use]
pub fn meta_tag_properties(doc: &Document) -> Vec<String> {
    meta_contents(doc, |_, property| {
        TAG_META_PROPERTIES.iter().any(|p| property.eq_ignore_ascii_case(p))
    })
}

/// Text of tag-styled links, verbatim.
///
/// A tag-styled element that wraps other tag elements is a container
/// (`<span class="post-tags">标签：<a rel="tag">..</a></span>`) and is skipped;
/// its children are collected on their own.
#[must_use]
pub fn tag_links(doc: &Document) -> Vec<String> {
    doc.select("a, span")
        .nodes()
        .iter()
        .filter(|node| is_tag_element(**node) && !wraps_tag_element(**node))
        .map(|node| dom::text_content(&Selection::from(*node)).to_string())
        .collect()
}

fn wraps_tag_element(node: NodeRef<'_>) -> bool {
    Selection::from(node)
        .select("a, span")
        .nodes()
        .iter()
        .any(|inner| is_tag_element(*inner))
}

/// `content` attributes of meta elements accepted by `accept(name, property)`.
fn meta_contents(doc: &Document, accept: impl Fn(&str, &str) -> bool) -> Vec<String> {
    doc.select("meta")
        .nodes()
        .iter()
        .filter(|node| {
            let name = dom::node_attribute(**node, "name").unwrap_or_default();
            let property = dom::node_attribute(**node, "property").unwrap_or_default();
            accept(name.trim(), property.trim())
        })
        .filter_map(|node| dom::node_attribute(*node, "content"))
        .collect()
}

fn push_unique(tags: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if !candidate.is_empty() && !tags.iter().any(|t| t == candidate) {
        tags.push(candidate.to_string());
    }
}
