//! Listing page resolution.
//!
//! Turns an index page into the ordered list of article URLs it links to.

use std::collections::HashSet;

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};
use crate::url_utils;
use crate::Options;

/// File suffixes of article detail pages.
const ARTICLE_SUFFIXES: &[&str] = &[".html", ".htm"];

/// Resolve article URLs from a listing page.
///
/// Anchors are kept when their resolved path lies under
/// `opts.article_path_prefix` and ends in `.html`/`.htm`, and they are not the
/// listing page itself. Relative hrefs are resolved against `base_url`.
/// Results are deduplicated in first-seen order and truncated to `limit`.
///
/// # Errors
///
/// * [`Error::InvalidLimit`] when `limit` is zero.
/// * [`Error::InvalidBaseUrl`] when `base_url` is not an absolute http(s) URL.
pub fn resolve_listing(doc: &Document, base_url: &str, limit: usize, opts: &Options) -> Result<Vec<String>> {
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    let base = url_utils::parse_absolute(base_url).ok_or_else(|| Error::InvalidBaseUrl(base_url.to_string()))?;

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for node in dom::elements_by_tag(doc, "a[href]") {
        let Some(href) = dom::node_attribute(node, "href") else {
            continue;
        };
        let Some(resolved) = url_utils::resolve_href(&href, &base) else {
            continue;
        };
        if !is_article_path(resolved.path(), opts) {
            continue;
        }

        let url = resolved.to_string();
        if url_utils::urls_match(&url, base.as_str()) {
            continue;
        }
        if seen.insert(url.clone()) {
            urls.push(url);
            if urls.len() >= limit {
                break;
            }
        }
    }

    tracing::debug!(base = %base, found = urls.len(), limit, "resolved listing page");
    Ok(urls)
}

/// Resolve article URLs from raw listing HTML with default options.
///
/// # Errors
///
/// See [`resolve_listing`].
pub fn resolve(html: &str, base_url: &str, limit: usize) -> Result<Vec<String>> {
    resolve_listing(&dom::parse(html), base_url, limit, &Options::default())
}

/// Whether `url` is a direct article page (`<prefix><digits>.html`) rather
/// than a listing page.
///
/// # Examples
/// ```
/// use rs_sharelinks::{listing::is_article_url, Options};
///
/// let opts = Options::default();
/// assert!(is_article_url("https://www.lewz.cn/jprj/12345.html", &opts));
/// assert!(!is_article_url("https://www.lewz.cn/jprj/", &opts));
/// ```
#[must_use]
pub fn is_article_url(url: &str, opts: &Options) -> bool {
    let path = url_utils::url_path(url);
    let Some(rest) = path.strip_prefix(opts.article_path_prefix.as_str()) else {
        return false;
    };
    let stem = ARTICLE_SUFFIXES
        .iter()
        .find_map(|suffix| rest.strip_suffix(suffix))
        .unwrap_or("");
    !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit())
}

fn is_article_path(path: &str, opts: &Options) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.starts_with(&opts.article_path_prefix.to_ascii_lowercase())
        && ARTICLE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.lewz.cn/jprj/";

    #[test]
    fn test_relative_and_absolute_links() {
        let html = r#"<ul>
            <li><a href="/jprj/12345.html">A</a></li>
            <li><a href="12346.html">B</a></li>
            <li><a href="https://www.lewz.cn/jprj/12347.html">C</a></li>
            <li><a href="/about.html">About</a></li>
            <li><a href="/jprj/">Listing</a></li>
        </ul>"#;

        let urls = resolve(html, BASE, 10).unwrap_or_default();
        assert_eq!(
            urls,
            vec![
                "https://www.lewz.cn/jprj/12345.html",
                "https://www.lewz.cn/jprj/12346.html",
                "https://www.lewz.cn/jprj/12347.html",
            ]
        );
    }

    #[test]
    fn test_dedup_and_fragment() {
        let html = r##"<a href="/jprj/1.html">x</a><a href="/jprj/1.html#comments">y</a><a href="/jprj/2.html">z</a>"##;
        let urls = resolve(html, BASE, 10).unwrap_or_default();
        assert_eq!(urls, vec!["https://www.lewz.cn/jprj/1.html", "https://www.lewz.cn/jprj/2.html"]);
    }

    #[test]
    fn test_listing_page_itself_excluded() {
        let base = "https://www.lewz.cn/jprj/index.html";
        let html = r#"<a href="index.html">home</a><a href="5.html">five</a>"#;
        let urls = resolve(html, base, 10).unwrap_or_default();
        assert_eq!(urls, vec!["https://www.lewz.cn/jprj/5.html"]);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(matches!(resolve("<a href='/jprj/1.html'>x</a>", BASE, 0), Err(Error::InvalidLimit)));
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(matches!(resolve("", "/jprj/", 5), Err(Error::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_is_article_url() {
        let opts = Options::default();
        assert!(is_article_url("https://www.lewz.cn/jprj/12345.html", &opts));
        assert!(is_article_url("https://www.lewz.cn/jprj/7.htm", &opts));
        assert!(!is_article_url("https://www.lewz.cn/jprj/list_2.html", &opts));
        assert!(!is_article_url("https://www.lewz.cn/jprj", &opts));
        assert!(!is_article_url("https://www.lewz.cn/other/1.html", &opts));
        assert!(!is_article_url("not a url", &opts));
    }
}
