use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use rs_sharelinks::{run_pipeline, Error, ExtractionOutcome, FetchStatus, FetchedPage, Options, PageFetcher};

const LISTING_URL: &str = "https://www.lewz.cn/jprj/";

/// In-memory site that counts fetches.
struct StaticSite {
    pages: HashMap<String, FetchedPage>,
    fetches: AtomicUsize,
}

impl StaticSite {
    fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            LISTING_URL.to_string(),
            FetchedPage::ok(include_str!("fixtures/listing_page.html")),
        );
        pages.insert(
            "https://www.lewz.cn/jprj/12345.html".to_string(),
            FetchedPage::ok(include_str!("fixtures/article_with_links.html")),
        );
        pages.insert(
            "https://www.lewz.cn/jprj/12346.html".to_string(),
            FetchedPage::failed(FetchStatus::Timeout),
        );
        pages.insert(
            "https://www.lewz.cn/jprj/12347.html".to_string(),
            FetchedPage::ok(include_str!("fixtures/article_no_links.html")),
        );
        pages.insert(
            "https://www.lewz.cn/jprj/12348.html".to_string(),
            FetchedPage::ok(include_str!("fixtures/article_malformed_password.html")),
        );
        Self {
            pages,
            fetches: AtomicUsize::new(0),
        }
    }
}

impl PageFetcher for StaticSite {
    fn fetch(&self, url: &str) -> FetchedPage {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchedPage::failed(FetchStatus::HttpError(404)))
    }
}

#[test]
fn pipeline_processes_listing_in_order() {
    let site = StaticSite::new();
    let results = match run_pipeline(&site, LISTING_URL, 10, &Options::default()) {
        Ok(results) => results,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(results.len(), 4);
    assert_eq!(site.fetches.load(Ordering::SeqCst), 5);

    let first = results[0].article().map_or_else(|| panic!("expected article"), Clone::clone);
    assert_eq!(first.source_url, "https://www.lewz.cn/jprj/12345.html");
    assert_eq!(first.share_links.len(), 2);

    match &results[1] {
        ExtractionOutcome::Error(record) => {
            assert!(record.error.contains("12346.html"));
            assert!(record.error.contains("timeout"));
        }
        ExtractionOutcome::Article(record) => panic!("expected error record, got {record:?}"),
    }

    assert_eq!(results[2].article().map(|r| r.share_links.len()), Some(0));
    assert_eq!(results[3].article().map(|r| r.share_links.len()), Some(3));
}

#[test]
fn pipeline_respects_limit() {
    let site = StaticSite::new();
    let results = run_pipeline(&site, LISTING_URL, 2, &Options::default()).unwrap_or_default();
    assert_eq!(results.len(), 2);
    assert_eq!(site.fetches.load(Ordering::SeqCst), 3);
}

#[test]
fn pipeline_article_start_url() {
    let site = StaticSite::new();
    let results = run_pipeline(&site, "https://www.lewz.cn/jprj/12345.html", 10, &Options::default()).unwrap_or_default();
    assert_eq!(results.len(), 1);
    assert_eq!(site.fetches.load(Ordering::SeqCst), 1);
    assert!(!results[0].is_error());
}

#[test]
fn pipeline_listing_failure_aborts() {
    let fetcher = |_: &str| FetchedPage::failed(FetchStatus::HttpError(500));
    let result = run_pipeline(&fetcher, LISTING_URL, 10, &Options::default());
    assert!(matches!(
        result,
        Err(Error::Fetch {
            status: FetchStatus::HttpError(500),
            ..
        })
    ));
}

#[test]
fn pipeline_empty_listing() {
    let fetcher = |_: &str| FetchedPage::ok("<html><body><p>暂无文章</p></body></html>");
    match run_pipeline(&fetcher, LISTING_URL, 10, &Options::default()) {
        Ok(results) => assert!(results.is_empty()),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
