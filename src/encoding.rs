//! Character encoding detection and transcoding.
//!
//! Many of the target pages are still served as GBK or GB18030. This module
//! sniffs the declared charset (or a byte-order mark) and decodes the raw
//! bytes into a UTF-8 `String` before any parsing happens.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_WINDOW: usize = 2048;

/// `<meta charset=...>` or `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([A-Za-z0-9_:.-]+)"#).expect("valid regex")
});

/// Declared charset label found in the first bytes of a page, if any.
#[must_use]
pub fn sniff_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the encoding of an HTML page.
///
/// A byte-order mark wins over a meta declaration; unknown labels and pages
/// without a declaration are treated as UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    sniff_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use rs_sharelinks::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>\xD6\xD0\xCE\xC4</body></html>";
/// let gbk = [&b"<meta charset=\"gbk\">"[..], &html[..]].concat();
/// assert!(transcode_to_utf8(&gbk).contains("中文"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced invalid byte sequences while decoding");
    }
    decoded.into_owned()
}
