//! Error types for rs-sharelinks.
//!
//! Missing titles, tags and passwords are never errors; they resolve to a
//! fallback or to absence. Only the cases below abort an operation.

use crate::pipeline::FetchStatus;

/// Error type for extraction and pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input cannot be treated as markup at all.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The listing resolver was called with a zero limit.
    #[error("Invalid limit: article limit must be a positive integer")]
    InvalidLimit,

    /// The base URL handed to the listing resolver is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The page-fetch collaborator did not return a usable page.
    #[error("Failed to fetch {url}: {status}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Status reported by the fetcher.
        status: FetchStatus,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
