//! # rs-sharelinks
//!
//! Share-link extraction for resource-sharing blogs.
//!
//! Given the HTML of an article page, this library produces a structured
//! record: the article title, its SEO keywords and tags, and every Baidu Pan
//! share link with the extraction password published next to it. A listing
//! resolver turns index pages into article URLs, and a small pipeline driver
//! runs both over a caller-supplied fetcher.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_sharelinks::extract_article;
//!
//! let html = r#"<html><head><title>Demo</title></head><body>
//! <p><a href="https://pan.baidu.com/s/abc123">link</a></p><p>提取码：wxyz</p>
//! </body></html>"#;
//!
//! let record = extract_article(html, "https://www.lewz.cn/jprj/1.html")?;
//! assert_eq!(record.title, "Demo");
//! assert_eq!(record.share_links[0].password.as_deref(), Some("wxyz"));
//! # Ok::<(), rs_sharelinks::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Title**: `<title>`, first `<h1>`, then meta titles, then a placeholder
//! - **Tags**: meta keywords, `article:tag` properties and tag links
//! - **Share links**: anchors and plain-text URLs, deduplicated in document order
//! - **Passwords**: query parameter, enclosing text, then nearby siblings
//! - **Listing pages**: bounded, deduplicated article URL resolution

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Listing page resolution.
pub mod listing;

/// Title and tag extraction.
pub mod metadata;

/// Fetch-driven pipeline over listing and article pages.
pub mod pipeline;

/// Share link discovery and password association.
pub mod share_links;

/// URL utilities for resolution, normalization and query parsing.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use listing::{is_article_url, resolve, resolve_listing};
pub use options::{Options, DEFAULT_TESTED_ON};
pub use pipeline::{run_pipeline, FetchStatus, FetchedPage, PageFetcher};
pub use result::{ArticleRecord, EngineMetadata, ErrorRecord, ExtractionOutcome, ShareLink};

/// Extracts an article record using default options.
///
/// # Arguments
///
/// * `html` - The article page as a string slice
/// * `source_url` - URL the page was fetched from, copied into the record
///
/// # Returns
///
/// Returns `Ok(ArticleRecord)` whenever the input is markup. Missing titles,
/// tags or passwords never fail; they fall back to a placeholder or absence.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] when the input is blank or contains
/// no markup at all.
pub fn extract_article(html: &str, source_url: &str) -> Result<ArticleRecord> {
    extract_article_with_options(html, source_url, &Options::default())
}

/// Extracts an article record with custom options.
///
/// # Example
///
/// ```rust
/// use rs_sharelinks::{extract_article_with_options, Options};
///
/// let html = r#"<p><a href="https://pan.baidu.com/s/1x">x</a> 密码: abc</p>"#;
/// let options = Options {
///     min_password_len: 3,
///     ..Options::default()
/// };
/// let record = extract_article_with_options(html, "https://www.lewz.cn/jprj/2.html", &options)?;
/// assert_eq!(record.share_links[0].password.as_deref(), Some("abc"));
/// # Ok::<(), rs_sharelinks::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_article_with_options(html: &str, source_url: &str, options: &Options) -> Result<ArticleRecord> {
    extract::extract_record(html, source_url, options)
}

/// Extracts an article record from raw bytes with encoding detection.
///
/// The charset is taken from a byte-order mark or a `<meta>` declaration,
/// defaulting to UTF-8. Undecodable bytes become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_sharelinks::extract_article_bytes;
///
/// // "中文" in GBK
/// let html = b"<html><head><meta charset=\"gbk\"><title>\xD6\xD0\xCE\xC4</title></head></html>";
/// let record = extract_article_bytes(html, "https://www.lewz.cn/jprj/3.html")?;
/// assert_eq!(record.title, "中文");
/// # Ok::<(), rs_sharelinks::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_article_bytes(html: &[u8], source_url: &str) -> Result<ArticleRecord> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_article(&html_str, source_url)
}

/// Extracts an article and folds any failure into an [`ErrorRecord`].
///
/// This is the shape written by the command-line tool and the pipeline: it
/// never fails, and the error variant carries the engine metadata.
///
/// # Example
///
/// ```rust
/// use rs_sharelinks::{extract_article_outcome, Options};
///
/// let outcome = extract_article_outcome("", "https://www.lewz.cn/jprj/4.html", &Options::default());
/// assert!(outcome.is_error());
/// ```
#[must_use]
pub fn extract_article_outcome(html: &str, source_url: &str, options: &Options) -> ExtractionOutcome {
    extract::extract_outcome(html, source_url, options)
}
