//! Share link extraction and password association.
//!
//! Discovery finds every share URL with the places it occurred. For each
//! unique URL the password is then searched with a fixed strategy order; the
//! first strategy that yields a long enough token wins:
//!
//! 1. a `pwd`/`password` query parameter on any occurrence;
//! 2. the anchor's parent text, or the paragraph window of a plain-text match;
//! 3. a bounded number of element siblings after the anchor's parent.
//!
//! Strategies are evaluated across all occurrences before the next strategy
//! runs, so a query-string password always beats nearby prose.

pub mod discovery;
pub mod neighborhood;
pub mod password;

use dom_query::Document;

use crate::result::ShareLink;
use crate::url_utils;
use crate::Options;

pub use discovery::{discover, Candidate, Occurrence, Origin};
pub use password::{find_password, match_pattern, PasswordPattern};

/// Password search strategies, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Query parameter on the URL itself.
    QueryParameter,
    /// Enclosing element text, or the text window for plain-text matches.
    EnclosingText,
    /// Element siblings following the anchor's parent.
    SiblingScan,
}

/// Order in which strategies are tried.
pub const STRATEGY_ORDER: [Strategy; 3] = [
    Strategy::QueryParameter,
    Strategy::EnclosingText,
    Strategy::SiblingScan,
];

/// Extract share links with their passwords, in order of first appearance.
///
/// # Example
///
/// ```rust
/// use rs_sharelinks::{dom, share_links::extract_share_links, Options};
///
/// let doc = dom::parse(r#"<p><a href="https://pan.baidu.com/s/abc123">link</a></p><p>提取码：wxyz</p>"#);
/// let links = extract_share_links(&doc, &Options::default());
/// assert_eq!(links[0].password.as_deref(), Some("wxyz"));
/// ```
#[must_use]
pub fn extract_share_links(doc: &Document, opts: &Options) -> Vec<ShareLink> {
    discovery::discover(doc, opts)
        .iter()
        .map(|candidate| {
            let found = associate_password(candidate, opts);
            if let Some((strategy, _)) = &found {
                tracing::debug!(url = %candidate.url, ?strategy, "password found");
            } else {
                tracing::debug!(url = %candidate.url, "no password found");
            }
            ShareLink::new(candidate.url.clone(), found.map(|(_, pwd)| pwd))
        })
        .collect()
}

/// Password for one candidate and the strategy that produced it.
#[must_use]
pub fn associate_password(candidate: &Candidate<'_>, opts: &Options) -> Option<(Strategy, String)> {
    STRATEGY_ORDER.iter().find_map(|&strategy| {
        candidate
            .occurrences
            .iter()
            .find_map(|occurrence| apply_strategy(strategy, occurrence, opts))
            .map(|pwd| (strategy, pwd))
    })
}

/// Run one strategy against one occurrence.
#[must_use]
pub fn apply_strategy(strategy: Strategy, occurrence: &Occurrence<'_>, opts: &Options) -> Option<String> {
    let min_len = opts.min_password_len;
    match (strategy, &occurrence.origin) {
        (Strategy::QueryParameter, _) => url_utils::query_password(&occurrence.raw, min_len),
        (Strategy::EnclosingText, Origin::Anchor(anchor)) => {
            neighborhood::enclosing_text(*anchor).and_then(|text| find_password(&text, min_len))
        }
        (Strategy::EnclosingText, Origin::Text { window }) => find_password(window, min_len),
        (Strategy::SiblingScan, Origin::Anchor(anchor)) => {
            neighborhood::sibling_texts(*anchor, opts.sibling_limit)
                .iter()
                .find_map(|text| find_password(text, min_len))
        }
        (Strategy::SiblingScan, Origin::Text { .. }) => None,
    }
}
