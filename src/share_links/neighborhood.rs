//! Bounded neighbourhoods searched for a link's password.
//!
//! Each function returns owned text blocks in search order. Nothing here
//! walks further than the caller's limits.

use dom_query::{NodeRef, Selection};

use crate::dom::{self, BLOCK_TAGS};
use crate::patterns::SHARE_URL;

/// Text of an anchor's immediate parent element.
#[must_use]
pub fn enclosing_text(anchor: NodeRef<'_>) -> Option<String> {
    dom::parent_element(anchor).map(node_text)
}

/// Texts of up to `limit` element siblings following the anchor's parent.
#[must_use]
pub fn sibling_texts(anchor: NodeRef<'_>, limit: usize) -> Vec<String> {
    dom::parent_element(anchor)
        .map(|parent| {
            dom::next_element_siblings(parent, limit)
                .into_iter()
                .map(node_text)
                .collect()
        })
        .unwrap_or_default()
}

/// Line of text around a share URL that appeared as plain text.
///
/// The nearest block-level ancestor of `text_node` is rendered with `<br>`
/// and nested blocks as line breaks (falling back to the node's own text).
/// The window is the line holding `needle`, bounded by any other share URL
/// on that line (see [`line_window`]) and clipped to `radius` characters
/// on each side.
#[must_use]
pub fn text_window(text_node: NodeRef<'_>, needle: &str, radius: usize) -> String {
    let text = dom::nearest_block(text_node).map_or_else(|| text_node.text().to_string(), rendered_lines);
    match find_url(&text, needle) {
        Some(start) => line_window(&text, start, start + needle.len(), radius),
        None => text,
    }
}

/// Window around `text[start..end]`: same line only, bounded by neighbouring
/// share URLs, at most `radius` characters each side. Leading text is kept
/// only when no other share URL precedes the match on its line.
#[must_use]
pub fn line_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);

    // Text before the match belongs to an earlier URL when one shares the line.
    let before = &text[line_start..start];
    let before = if SHARE_URL.is_match(before) { "" } else { before };
    let after = &text[end..line_end];
    let after = SHARE_URL.find(after).map_or(after, |m| &after[..m.start()]);

    let before: String = {
        let mut chars: Vec<char> = before.chars().rev().take(radius).collect();
        chars.reverse();
        chars.into_iter().collect()
    };
    let after: String = after.chars().take(radius).collect();

    format!("{before}{}{after}", &text[start..end])
}

/// Byte offset of `needle` in `text` where it is not the prefix of a longer
/// share URL.
fn find_url(text: &str, needle: &str) -> Option<usize> {
    text.match_indices(needle).map(|(i, _)| i).find(|&i| {
        !text[i + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}

/// Visible text of `block` with `<br>` and nested block elements rendered as
/// line breaks.
fn rendered_lines(block: NodeRef<'_>) -> String {
    let mut out = String::new();
    for node in block.descendants() {
        if node.is_text() {
            if !dom::is_hidden(node) {
                out.push_str(&node.text());
            }
        } else if dom::is_tag(node, &["br"]) || dom::is_tag(node, BLOCK_TAGS) {
            out.push('\n');
        }
    }
    out
}

fn node_text(node: NodeRef<'_>) -> String {
    dom::text_content(&Selection::from(node)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector)
            .nodes()
            .first()
            .copied()
            .map_or_else(|| panic!("no element for {selector}"), |n| n)
    }

    #[test]
    fn test_enclosing_text() {
        let doc = Document::from(r#"<div><p>链接：<a href="x">点此</a> 提取码：wxyz</p></div>"#);
        let text = enclosing_text(first(&doc, "a"));
        assert_eq!(text.as_deref(), Some("链接：点此 提取码：wxyz"));
    }

    #[test]
    fn test_sibling_texts_bounded_to_limit() {
        let doc = Document::from(
            r#"<div><p><a href="x">link</a></p><p>one</p><p>two</p><p>three</p><p>four</p></div>"#,
        );
        let texts = sibling_texts(first(&doc, "a"), 3);
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_text_window_uses_block() {
        let doc = Document::from("<div><p>下载 <b>地址</b> https://pan.baidu.com/s/1x 提取码 abcd</p><p>other</p></div>");
        let text_node = first(&doc, "p")
            .descendants()
            .into_iter()
            .find(|n| n.is_text() && n.text().contains("pan.baidu"))
            .map_or_else(|| panic!("no text node"), |n| n);

        let window = text_window(text_node, "https://pan.baidu.com/s/1x", 200);
        assert_eq!(window, "下载 地址 https://pan.baidu.com/s/1x 提取码 abcd");
    }

    #[test]
    fn test_line_window_counts_chars() {
        assert_eq!(line_window("甲乙丙URL丁戊己", 9, 12, 2), "乙丙URL丁戊");
        assert_eq!(line_window("URL", 0, 3, 5), "URL");
    }

    #[test]
    fn test_text_window_stays_on_its_line() {
        let doc = Document::from(
            "<p>链接1：https://pan.baidu.com/s/1aaa 提取码：aaaa<br>链接2：https://pan.baidu.com/s/1bbb 提取码：bbbb</p>",
        );
        let text_node = first(&doc, "p")
            .descendants()
            .into_iter()
            .find(|n| n.is_text() && n.text().contains("1bbb"))
            .map_or_else(|| panic!("no text node"), |n| n);

        let window = text_window(text_node, "https://pan.baidu.com/s/1bbb", 200);
        assert_eq!(window, "链接2：https://pan.baidu.com/s/1bbb 提取码：bbbb");
    }

    #[test]
    fn test_line_window_stops_at_other_urls() {
        let text = "A https://pan.baidu.com/s/1a 提取码 aaaa B https://pan.baidu.com/s/1b 提取码 bbbb";
        let start = text.find("https://pan.baidu.com/s/1b").map_or_else(|| panic!("missing"), |i| i);
        let window = line_window(text, start, start + "https://pan.baidu.com/s/1b".len(), 200);
        assert_eq!(window, "https://pan.baidu.com/s/1b 提取码 bbbb");

        let start = text.find("https://pan.baidu.com/s/1a").map_or_else(|| panic!("missing"), |i| i);
        let window = line_window(text, start, start + "https://pan.baidu.com/s/1a".len(), 200);
        assert_eq!(window, "A https://pan.baidu.com/s/1a 提取码 aaaa B ");
    }

    #[test]
    fn test_prefix_url_is_not_matched() {
        let text = "x https://pan.baidu.com/s/1ab y https://pan.baidu.com/s/1a z";
        assert_eq!(find_url(text, "https://pan.baidu.com/s/1a"), Some(32));
    }
}
