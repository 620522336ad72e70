//! Result types for extraction output.
//!
//! This module defines the records produced by the engine and their JSON
//! shape. Records are built fresh per document and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::options::Options;

/// A cloud-storage share link with an optional access password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    /// Absolute share URL, query string removed.
    pub url: String,

    /// Extraction code, `None` when no token of sufficient length was found.
    /// Never an empty string.
    pub password: Option<String>,
}

impl ShareLink {
    /// Builds a link, discarding empty passwords.
    #[must_use]
    pub fn new(url: impl Into<String>, password: Option<String>) -> Self {
        Self {
            url: url.into(),
            password: password.filter(|p| !p.is_empty()),
        }
    }
}

/// Structured record extracted from one article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// URL of the article as given to the extractor.
    pub source_url: String,

    /// Article title; falls back to a placeholder, never empty.
    pub title: String,

    /// Keywords and tags in discovery order.
    #[serde(rename = "seo_tags")]
    pub tags: Vec<String>,

    /// Share links in order of first appearance in the document.
    pub share_links: Vec<ShareLink>,
}

/// Static identity of the engine, attached to every error record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// Crate version.
    pub version: String,

    /// Sites the extraction rules were verified against.
    pub tested_on: Vec<String>,
}

impl EngineMetadata {
    /// Metadata for this build, with the site list taken from `opts`.
    #[must_use]
    pub fn current(opts: &Options) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            tested_on: opts.tested_on.clone(),
        }
    }
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self::current(&Options::default())
    }
}

/// Output variant produced when a record cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable message.
    pub error: String,

    /// Engine identity.
    pub metadata: EngineMetadata,
}

impl ErrorRecord {
    /// Error record with an arbitrary message.
    #[must_use]
    pub fn new(error: impl Into<String>, opts: &Options) -> Self {
        Self {
            error: error.into(),
            metadata: EngineMetadata::current(opts),
        }
    }

    /// Error record describing `err`.
    #[must_use]
    pub fn from_error(err: &Error, opts: &Options) -> Self {
        Self::new(err.to_string(), opts)
    }
}

/// Either a full record or an error note, serialized without a tag so the
/// JSON matches one of the two documented shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    /// Extraction succeeded.
    Article(ArticleRecord),
    /// Extraction or fetching failed for this page.
    Error(ErrorRecord),
}

impl ExtractionOutcome {
    /// Returns the record when extraction succeeded.
    #[must_use]
    pub fn article(&self) -> Option<&ArticleRecord> {
        match self {
            Self::Article(record) => Some(record),
            Self::Error(_) => None,
        }
    }

    /// Returns `true` for the error variant.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
