//! Share link discovery.
//!
//! Finds every share URL in a document, in document order, remembering where
//! each occurrence was found so the password search can look around it.

use std::collections::{HashMap, HashSet};

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::patterns::SHARE_URL;
use crate::share_links::neighborhood;
use crate::url_utils;
use crate::Options;

/// Where a share URL occurrence was found.
#[derive(Debug, Clone)]
pub enum Origin<'a> {
    /// `href` of an `<a>` element.
    Anchor(NodeRef<'a>),
    /// Visible text outside any matching anchor, with the clipped paragraph
    /// around it.
    Text {
        /// Paragraph text around the match.
        window: String,
    },
}

/// One occurrence of a share URL.
#[derive(Debug, Clone)]
pub struct Occurrence<'a> {
    /// Raw source of the URL: the full `href`, or the matched text including
    /// any query string. Query passwords are read from here.
    pub raw: String,
    /// Location in the document.
    pub origin: Origin<'a>,
}

/// A unique share URL and all of its occurrences, first one first.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// Share URL as first seen, without query string.
    pub url: String,
    /// Deduplication key, see [`url_utils::share_key`].
    pub key: String,
    /// Occurrences in document order.
    pub occurrences: Vec<Occurrence<'a>>,
}

/// Discover share URLs in document order, grouped by normalized URL.
///
/// Anchors are matched on their `href`. Visible text nodes are scanned with
/// the same pattern; a text match whose URL is already the target of a
/// matching anchor anywhere in the document is discarded.
#[must_use]
pub fn discover<'a>(doc: &'a Document, opts: &Options) -> Vec<Candidate<'a>> {
    let Some(root) = dom::document_root(doc) else {
        return Vec::new();
    };

    let anchor_keys = anchor_share_keys(doc);
    let mut candidates: Vec<Candidate<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut record = |url: &str, occurrence: Occurrence<'a>| {
        let key = url_utils::share_key(url);
        if let Some(&i) = index.get(&key) {
            candidates[i].occurrences.push(occurrence);
        } else {
            index.insert(key.clone(), candidates.len());
            candidates.push(Candidate {
                url: url.to_string(),
                key,
                occurrences: vec![occurrence],
            });
        }
    };

    for node in root.descendants() {
        if node.is_element() {
            if !dom::is_tag(node, &["a"]) {
                continue;
            }
            let Some(href) = dom::node_attribute(node, "href").map(|h| url_utils::assume_https(&h)) else {
                continue;
            };
            if let Some(caps) = SHARE_URL.captures(&href) {
                record(
                    &caps[1],
                    Occurrence {
                        raw: href.clone(),
                        origin: Origin::Anchor(node),
                    },
                );
            }
        } else if node.is_text() && !dom::is_hidden(node) {
            let text = node.text();
            for caps in SHARE_URL.captures_iter(&text) {
                let url = &caps[1];
                if anchor_keys.contains(&url_utils::share_key(url)) {
                    continue;
                }
                let matched = &caps[0];
                record(
                    url,
                    Occurrence {
                        raw: matched.to_string(),
                        origin: Origin::Text {
                            window: neighborhood::text_window(node, matched, opts.context_radius),
                        },
                    },
                );
            }
        }
    }

    candidates
}

/// Keys of every share URL that is the target of an anchor.
fn anchor_share_keys(doc: &Document) -> HashSet<String> {
    doc.select("a[href]")
        .nodes()
        .iter()
        .filter_map(|node| dom::node_attribute(*node, "href"))
        .map(|href| url_utils::assume_https(&href))
        .filter_map(|href| SHARE_URL.captures(&href).map(|caps| url_utils::share_key(&caps[1])))
        .collect()
}
