//! Configuration options for extraction.
//!
//! The `Options` struct holds the tunable thresholds of the extraction engine:
//! the password length floor, the size of the neighbourhood searched for a
//! password, and the article URL shape used by the listing resolver.

/// Default site identifiers reported in error metadata.
pub const DEFAULT_TESTED_ON: &[&str] = &["lewz.cn/jprj"];

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_sharelinks::Options;
///
/// let options = Options {
///     sibling_limit: 5,
///     ..Options::default()
/// };
/// assert_eq!(options.min_password_len, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Title used when no `<title>`, `<h1>` or meta title is present.
    ///
    /// Default: `"Untitled"`
    pub untitled: String,

    /// Minimum number of characters for a captured password token.
    ///
    /// Shorter tokens are treated as non-matches, so a stray word after a
    /// label is never reported as a password.
    ///
    /// Default: `4`
    pub min_password_len: usize,

    /// Number of element siblings after an anchor's parent that are searched
    /// for a password.
    ///
    /// Default: `3`
    pub sibling_limit: usize,

    /// Characters of block text kept on each side of a plain-text share URL
    /// when searching for its password.
    ///
    /// Default: `200`
    pub context_radius: usize,

    /// Path prefix that article pages live under on the target site.
    ///
    /// Default: `"/jprj/"`
    pub article_path_prefix: String,

    /// Site identifiers attached to error records.
    ///
    /// Default: `["lewz.cn/jprj"]`
    pub tested_on: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            untitled: "Untitled".to_string(),
            min_password_len: 4,
            sibling_limit: 3,
            context_radius: 200,
            article_path_prefix: "/jprj/".to_string(),
            tested_on: DEFAULT_TESTED_ON.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
