//! Article extraction orchestration.
//!
//! Runs the title, tag and share-link extractors over one parsed document.
//! No sub-extraction can abort the record; only input that is not markup at
//! all is rejected.

use crate::dom;
use crate::error::{Error, Result};
use crate::metadata;
use crate::options::Options;
use crate::patterns::MARKUP_TAG;
use crate::result::{ArticleRecord, ErrorRecord, ExtractionOutcome};
use crate::share_links;

/// Main entry point for article extraction.
pub(crate) fn extract_record(html: &str, source_url: &str, options: &Options) -> Result<ArticleRecord> {
    ensure_markup(html)?;

    let document = dom::parse(html);
    let metadata = metadata::extract_metadata(&document, options);
    let share_links = share_links::extract_share_links(&document, options);

    tracing::debug!(
        source_url,
        title = %metadata.title,
        tags = metadata.tags.len(),
        share_links = share_links.len(),
        "extracted article"
    );

    Ok(ArticleRecord {
        source_url: source_url.to_string(),
        title: metadata.title,
        tags: metadata.tags,
        share_links,
    })
}

/// Extraction that folds failure into an error record.
pub(crate) fn extract_outcome(html: &str, source_url: &str, options: &Options) -> ExtractionOutcome {
    match extract_record(html, source_url, options) {
        Ok(record) => ExtractionOutcome::Article(record),
        Err(err) => {
            tracing::warn!(source_url, error = %err, "article extraction failed");
            ExtractionOutcome::Error(ErrorRecord::from_error(&err, options))
        }
    }
}

/// Reject input that cannot be treated as markup.
///
/// The HTML parser accepts any string, so "unparseable" means: blank after
/// trimming, or no tag, comment or doctype anywhere in the input.
fn ensure_markup(html: &str) -> Result<()> {
    if html.trim().is_empty() {
        return Err(Error::MalformedDocument("document is empty".to_string()));
    }
    if !MARKUP_TAG.is_match(html) {
        return Err(Error::MalformedDocument("no HTML markup found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(ensure_markup(""), Err(Error::MalformedDocument(_))));
        assert!(matches!(ensure_markup(" \n\t "), Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn test_plain_text_is_malformed() {
        assert!(matches!(
            ensure_markup("提取码：wxyz https://pan.baidu.com/s/1x"),
            Err(Error::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_fragment_is_markup() {
        assert!(ensure_markup("<p>x").is_ok());
    }

    #[test]
    fn test_outcome_wraps_error() {
        let outcome = extract_outcome("", "https://www.lewz.cn/jprj/1.html", &Options::default());
        match outcome {
            ExtractionOutcome::Error(record) => assert!(!record.error.is_empty()),
            ExtractionOutcome::Article(record) => panic!("expected error record, got {record:?}"),
        }
    }

    #[test]
    fn test_record_carries_source_url() {
        let record = extract_record("<title>T</title>", "https://www.lewz.cn/jprj/9.html", &Options::default());
        match record {
            Ok(record) => {
                assert_eq!(record.source_url, "https://www.lewz.cn/jprj/9.html");
                assert_eq!(record.title, "T");
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }
}
