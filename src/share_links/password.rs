//! Password matching over a single block of text.

use crate::patterns::PASSWORD_PATTERNS;

pub use crate::patterns::PasswordPattern;

/// First password in `text` according to the ordered pattern list.
///
/// Patterns are tried in order; within a pattern, matches are tried left to
/// right. Tokens shorter than `min_len` characters are skipped, so
/// `"密码: ab"` yields `None`.
///
/// # Examples
/// ```
/// use rs_sharelinks::share_links::find_password;
///
/// assert_eq!(find_password("提取码：wxyz", 4), Some("wxyz".to_string()));
/// assert_eq!(find_password("密码: ab", 4), None);
/// ```
#[must_use]
pub fn find_password(text: &str, min_len: usize) -> Option<String> {
    PASSWORD_PATTERNS
        .iter()
        .find_map(|pattern| match_pattern(pattern, text, min_len))
}

/// First sufficiently long token captured by one pattern.
#[must_use]
pub fn match_pattern(pattern: &PasswordPattern, text: &str, min_len: usize) -> Option<String> {
    pattern
        .regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|token| token.chars().count() >= min_len)
        .map(str::to_string)
}
