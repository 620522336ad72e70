use rs_sharelinks::{extract_article, extract_article_with_options, Options};

const URL: &str = "https://www.lewz.cn/jprj/1.html";

fn title_of(html: &str) -> String {
    match extract_article(html, URL) {
        Ok(record) => record.title,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn title_from_title_tag() {
    let html = r#"
        <html>
          <head><title>测试文章 - Python编程资源</title></head>
          <body><h1>Heading</h1></body>
        </html>
    "#;
    assert_eq!(title_of(html), "测试文章 - Python编程资源");
}

#[test]
fn title_is_trimmed() {
    assert_eq!(title_of("<html><head><title>\n   Spaced  \n</title></head></html>"), "Spaced");
}

#[test]
fn title_falls_back_to_h1_when_title_missing() {
    let html = r#"
        <html>
          <head></head>
          <body><h1>First</h1><h1>Second</h1></body>
        </html>
    "#;
    assert_eq!(title_of(html), "First");
}

#[test]
fn title_falls_back_to_h1_when_title_blank() {
    assert_eq!(title_of("<html><head><title>   </title></head><body><h1>Heading</h1></body></html>"), "Heading");
}

#[test]
fn title_falls_back_to_og_title_when_title_and_h1_missing() {
    let html = r#"
        <html>
          <head><meta property="og:title" content="OG Title" /></head>
          <body><p>Body</p></body>
        </html>
    "#;
    assert_eq!(title_of(html), "OG Title");
}

#[test]
fn title_falls_back_to_twitter_title() {
    let html = r#"<html><head><meta name="twitter:title" content="Twitter Title"></head><body><p>x</p></body></html>"#;
    assert_eq!(title_of(html), "Twitter Title");
}

#[test]
fn title_defaults_to_untitled() {
    assert_eq!(title_of("<html><body><p>No title</p></body></html>"), "Untitled");
}

#[test]
fn title_placeholder_is_configurable() {
    let options = Options {
        untitled: "无标题".to_string(),
        ..Options::default()
    };
    match extract_article_with_options("<p>x</p>", URL, &options) {
        Ok(record) => assert_eq!(record.title, "无标题"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
