// src/utils/text.rs

//! Text extraction helpers for the portal's markup conventions.

use std::sync::LazyLock;

use regex::Regex;

static TRAILING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=(\d+)$").expect("valid trailing id regex"));

static QUOTED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(.*?)'").expect("valid quoted literal regex"));

/// Extract the digits following the last `=` at the end of `href`.
///
/// # Examples
/// ```
/// use pknulms::utils::text::trailing_id;
///
/// assert_eq!(trailing_id("/ilos/st/course/notice_view.acl?ARTL_NUM=4821"), Some(4821));
/// assert_eq!(trailing_id("/ilos/st/course/notice_view.acl"), None);
/// ```
pub fn trailing_id(href: &str) -> Option<u64> {
    TRAILING_ID
        .captures(href)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Return the `n`-th (0-based) single-quoted string literal in a script snippet.
pub fn quoted_literal(script: &str, n: usize) -> Option<&str> {
    QUOTED_LITERAL
        .captures_iter(script)
        .nth(n)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip `origin` from the front of an absolute portal link.
pub fn strip_origin<'a>(link: &'a str, origin: &str) -> &'a str {
    link.strip_prefix(origin.trim_end_matches('/'))
        .unwrap_or(link)
}

/// Collect an element's text content, trimmed.
pub fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
