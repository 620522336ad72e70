//! Pipeline driver.
//!
//! Composes the listing resolver and the article extractor over a
//! caller-supplied page fetcher. Network access, retries and caching belong
//! to the fetcher; the driver only decides what to fetch and keeps going when
//! a single article fails.

use std::fmt;

use rayon::prelude::*;

use crate::dom;
use crate::error::{Error, Result};
use crate::extract;
use crate::listing;
use crate::result::{ErrorRecord, ExtractionOutcome};
use crate::Options;

/// Outcome of one fetch as reported by the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Page body is usable.
    Ok,
    /// The request timed out.
    Timeout,
    /// The server answered with a non-success status code.
    HttpError(u16),
    /// Connection-level failure.
    NetworkError(String),
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Timeout => f.write_str("timeout"),
            Self::HttpError(code) => write!(f, "HTTP error {code}"),
            Self::NetworkError(msg) => write!(f, "network error: {msg}"),
        }
    }
}

/// A fetched page: body plus status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Raw HTML, passed to the extractors unchanged.
    pub html: String,
    /// Fetch status.
    pub status: FetchStatus,
}

impl FetchedPage {
    /// Successful fetch.
    #[must_use]
    pub fn ok(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            status: FetchStatus::Ok,
        }
    }

    /// Failed fetch with an empty body.
    #[must_use]
    pub fn failed(status: FetchStatus) -> Self {
        Self {
            html: String::new(),
            status,
        }
    }
}

/// Page-fetch collaborator.
///
/// Implementations must be `Sync`: articles are fetched and extracted in
/// parallel.
pub trait PageFetcher: Sync {
    /// Fetch `url`.
    fn fetch(&self, url: &str) -> FetchedPage;
}

impl<F> PageFetcher for F
where
    F: Fn(&str) -> FetchedPage + Sync,
{
    fn fetch(&self, url: &str) -> FetchedPage {
        self(url)
    }
}

/// Run the full pipeline from a start URL.
///
/// A start URL that is itself an article page is extracted directly.
/// Otherwise it is fetched as a listing page, resolved to at most `limit`
/// article URLs, and each article is fetched and extracted. The result holds
/// one entry per attempted article, in listing order; per-article failures
/// become error records.
///
/// # Errors
///
/// * [`Error::InvalidLimit`] when `limit` is zero.
/// * [`Error::Fetch`] when the listing page itself cannot be fetched.
/// * [`Error::InvalidBaseUrl`] when `start_url` is not absolute.
pub fn run_pipeline<F>(fetcher: &F, start_url: &str, limit: usize, opts: &Options) -> Result<Vec<ExtractionOutcome>>
where
    F: PageFetcher + ?Sized,
{
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }

    if listing::is_article_url(start_url, opts) {
        tracing::info!(url = start_url, "start URL is an article page");
        return Ok(vec![process_article(fetcher, start_url, opts)]);
    }

    let listing_html = fetch_html(fetcher, start_url)?;
    let urls = listing::resolve_listing(&dom::parse(&listing_html), start_url, limit, opts)?;
    tracing::info!(url = start_url, articles = urls.len(), "resolved listing page");

    Ok(process_articles(fetcher, &urls, opts))
}

/// Fetch and extract several articles in parallel, keeping input order.
#[must_use]
pub fn process_articles<F>(fetcher: &F, urls: &[String], opts: &Options) -> Vec<ExtractionOutcome>
where
    F: PageFetcher + ?Sized,
{
    let results: Vec<ExtractionOutcome> = urls
        .par_iter()
        .map(|url| process_article(fetcher, url, opts))
        .collect();

    let errors = results.iter().filter(|r| r.is_error()).count();
    tracing::info!(
        "Processed {} articles ({} ok, {} errors)",
        results.len(),
        results.len() - errors,
        errors
    );
    results
}

/// Fetch and extract one article; failures become an error record.
#[must_use]
pub fn process_article<F>(fetcher: &F, url: &str, opts: &Options) -> ExtractionOutcome
where
    F: PageFetcher + ?Sized,
{
    match fetch_html(fetcher, url) {
        Ok(html) => extract::extract_outcome(&html, url, opts),
        Err(err) => {
            tracing::warn!("Failed to process {}: {}", url, err);
            ExtractionOutcome::Error(ErrorRecord::from_error(&err, opts))
        }
    }
}

fn fetch_html<F>(fetcher: &F, url: &str) -> Result<String>
where
    F: PageFetcher + ?Sized,
{
    let page = fetcher.fetch(url);
    match page.status {
        FetchStatus::Ok => Ok(page.html),
        status => Err(Error::Fetch {
            url: url.to_string(),
            status,
        }),
    }
}
