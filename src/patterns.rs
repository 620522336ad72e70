//! Compiled regex patterns and named matching constants.
//!
//! All patterns are compiled once on first use via `LazyLock`. The password
//! patterns form an ordered list: earlier entries take precedence when two of
//! them could match the same block of text.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Share Link Patterns
// =============================================================================

/// Baidu Netdisk share URL.
///
/// Group 1 is the share URL without query, group 2 the optional query string
/// (including the leading `?`). The query stops at whitespace, quotes, angle
/// brackets, fragments and full-width punctuation so a URL pasted into Chinese
/// prose does not swallow the following sentence.
pub static SHARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"((?i:https?://pan\.baidu\.com)/s/[A-Za-z0-9_-]+)(\?[^\s"'<>#，。；：！、）】]*)?"#)
        .expect("SHARE_URL regex")
});

/// Query keys that carry an extraction code.
pub const PASSWORD_QUERY_KEYS: &[&str] = &["pwd", "password"];

// =============================================================================
// Password Patterns
// =============================================================================

/// One entry of the ordered password pattern list.
///
/// Group 1 of `regex` captures the candidate token; the length floor is
/// applied by the caller.
#[derive(Debug)]
pub struct PasswordPattern {
    /// Short name used in logs and tests.
    pub label: &'static str,
    /// Compiled pattern.
    pub regex: Regex,
}

/// Password patterns in precedence order.
///
/// 1. Chinese labels `提取码` / `密码`, optional ASCII or full-width colon.
/// 2. English labels `pwd` / `password` (any case), then a colon or whitespace.
///
/// Tokens are ASCII word characters only, so a label followed by Chinese prose
/// ("提取码请看评论") never produces a token.
pub static PASSWORD_PATTERNS: LazyLock<Vec<PasswordPattern>> = LazyLock::new(|| {
    vec![
        PasswordPattern {
            label: "chinese",
            regex: Regex::new(r"(?:提取码|密码)\s*[：:]?\s*([0-9A-Za-z_]+)")
                .expect("chinese password regex"),
        },
        PasswordPattern {
            label: "english",
            regex: Regex::new(r"(?i)(?:^|[^0-9A-Za-z_])(?:password|pwd)(?:\s*[：:]\s*|\s+)([0-9A-Za-z_]+)")
                .expect("english password regex"),
        },
    ]
});

// =============================================================================
// Tag Patterns
// =============================================================================

/// Separators inside `<meta name="keywords">`, ASCII and full-width.
pub static KEYWORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[,;，；、]\s*").expect("KEYWORD_SEPARATOR regex")
});

/// Class-name fragments that mark an element as a tag link.
pub const TAG_CLASS_MARKERS: &[&str] = &["tag", "keyword", "label"];

/// `rel` values that mark an anchor as a tag link.
pub const TAG_REL_VALUES: &[&str] = &["tag"];

/// Meta properties carrying one tag each.
pub const TAG_META_PROPERTIES: &[&str] = &["article:tag", "og:tag"];

// =============================================================================
// Markup Detection
// =============================================================================

/// Matches anything that looks like an HTML tag, comment or doctype.
pub static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:[A-Za-z][A-Za-z0-9-]*|/[A-Za-z]|!)").expect("MARKUP_TAG regex")
});

/// Selector for title-like meta elements, in fallback order.
pub const META_TITLE_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
    r#"meta[name="title"]"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_splits_query() {
        let caps = SHARE_URL.captures("见 https://pan.baidu.com/s/1AbC-d_9?pwd=wxyz，提取");
        let caps = caps.map_or_else(|| panic!("expected a share URL match"), |c| c);
        assert_eq!(&caps[1], "https://pan.baidu.com/s/1AbC-d_9");
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("?pwd=wxyz"));
    }

    #[test]
    fn share_url_ignores_other_hosts() {
        assert!(!SHARE_URL.is_match("https://pan.example.com/s/abc"));
        assert!(!SHARE_URL.is_match("https://pan.baidu.com/share/home"));
    }

    fn capture(index: usize, text: &str) -> Option<String> {
        PASSWORD_PATTERNS[index]
            .regex
            .captures(text)
            .map(|c| c[1].to_string())
    }

    #[test]
    fn chinese_pattern_in_isolation() {
        assert_eq!(capture(0, "提取码：abcd").as_deref(), Some("abcd"));
        assert_eq!(capture(0, "提取码: xyz9").as_deref(), Some("xyz9"));
        assert_eq!(capture(0, "提取码 test123").as_deref(), Some("test123"));
        assert_eq!(capture(0, "密码:pass1234").as_deref(), Some("pass1234"));
        assert_eq!(capture(0, "提取码请看评论区"), None);
    }

    #[test]
    fn english_pattern_in_isolation() {
        assert_eq!(capture(1, "pwd: testpwd").as_deref(), Some("testpwd"));
        assert_eq!(capture(1, "Password abcd").as_deref(), Some("abcd"));
        assert_eq!(capture(1, "链接pwd：q1w2").as_deref(), Some("q1w2"));
        assert_eq!(capture(1, "forgotpwd: nope"), None);
        assert_eq!(capture(1, "pwdabcd"), None);
    }

    #[test]
    fn pattern_order_is_chinese_first() {
        let labels: Vec<&str> = PASSWORD_PATTERNS.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["chinese", "english"]);
    }

    #[test]
    fn keyword_separator_handles_full_width() {
        let parts: Vec<&str> = KEYWORD_SEPARATOR.split("Python，编程; 教程、资源").collect();
        assert_eq!(parts, vec!["Python", "编程", "教程", "资源"]);
    }

    #[test]
    fn markup_tag_detection() {
        assert!(MARKUP_TAG.is_match("<p>x</p>"));
        assert!(MARKUP_TAG.is_match("<!DOCTYPE html>"));
        assert!(!MARKUP_TAG.is_match("just 1 < 2 text"));
    }
}
