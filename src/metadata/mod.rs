//! Metadata extraction module.
//!
//! Title and tag extraction for article pages. Both are total functions:
//! they fall back or return an empty list rather than failing.

pub mod tags;
pub mod title;

use dom_query::Document;

use crate::Options;

pub use tags::{extract_tags, is_tag_element, meta_keywords, meta_tag_properties, tag_links};
pub use title::{extract_title, first_heading, meta_title, title_element};

/// Title and tags of an article page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMetadata {
    /// Non-empty title.
    pub title: String,
    /// Tags in source-priority order.
    pub tags: Vec<String>,
}

/// Extract all metadata from a document.
#[must_use]
pub fn extract_metadata(doc: &Document, opts: &Options) -> ArticleMetadata {
    ArticleMetadata {
        title: title::extract_title(doc, opts),
        tags: tags::extract_tags(doc),
    }
}
