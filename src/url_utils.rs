//! URL Utility Functions
//!
//! Validation, relative resolution and normalization of article and share
//! URLs, plus decoding of extraction codes carried in a query string.

use url::{form_urlencoded, Url};

use crate::patterns::PASSWORD_QUERY_KEYS;

/// Href schemes that never point at a page.
const NON_PAGE_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Parse a string as an absolute http(s) URL with a host.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Resolve an href found on a page against the page's URL.
///
/// Standard URL-join semantics: scheme and host are inherited, paths are
/// resolved relative to the base. Fragments are dropped. Empty hrefs,
/// fragment-only hrefs and non-page schemes resolve to `None`.
#[must_use]
pub fn resolve_href(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if NON_PAGE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    let mut resolved = base.join(href).ok()?;
    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }
    resolved.set_fragment(None);
    Some(resolved)
}

/// Trimmed href with an `https:` scheme added to protocol-relative
/// (`//host/path`) references.
#[must_use]
pub fn assume_https(href: &str) -> String {
    let href = href.trim();
    if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    }
}

/// Normalize a page URL by removing fragments and trailing slashes.
#[must_use]
pub fn normalize_url(url_str: &str) -> String {
    let Some(mut url) = parse_absolute(url_str) else {
        return url_str.trim().to_string();
    };

    url.set_fragment(None);

    // Remove trailing slash from path (unless root)
    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(&path[..path.len() - 1]);
    }

    url.to_string()
}

/// Check if two URLs point to the same page (ignoring fragments).
#[must_use]
pub fn urls_match(url1: &str, url2: &str) -> bool {
    normalize_url(url1) == normalize_url(url2)
}

/// Deduplication key for share links: case-insensitive, trailing slashes
/// ignored.
///
/// # Examples
/// ```
/// use rs_sharelinks::url_utils::share_key;
///
/// assert_eq!(
///     share_key("https://PAN.baidu.com/s/1AbC/"),
///     share_key("https://pan.baidu.com/s/1abc"),
/// );
/// ```
#[must_use]
pub fn share_key(url: &str) -> String {
    url.trim().trim_end_matches('/').to_lowercase()
}

/// Extraction code carried in a query string.
///
/// Accepts either a full URL or a bare query (with or without the leading
/// `?`). Values are percent-decoded and trimmed; values shorter than
/// `min_len` characters are ignored.
///
/// # Examples
/// ```
/// use rs_sharelinks::url_utils::query_password;
///
/// assert_eq!(
///     query_password("https://pan.baidu.com/s/1abc?pwd=wxyz", 4),
///     Some("wxyz".to_string()),
/// );
/// assert_eq!(query_password("?pwd=ab", 4), None);
/// ```
#[must_use]
pub fn query_password(url_or_query: &str, min_len: usize) -> Option<String> {
    let query = match url_or_query.split_once('?') {
        Some((_, q)) => q,
        None => url_or_query,
    };
    let query = query.split('#').next().unwrap_or(query);

    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| PASSWORD_QUERY_KEYS.iter().any(|k| key.eq_ignore_ascii_case(k)))
        .map(|(_, value)| value.trim().to_string())
        .find(|value| value.chars().count() >= min_len)
}

/// Path of a URL, or the empty string when it does not parse.
#[must_use]
pub fn url_path(url_str: &str) -> String {
    parse_absolute(url_str)
        .map(|url| url.path().to_string())
        .unwrap_or_default()
}
