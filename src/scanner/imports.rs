//! `@import` discovery inside fetched stylesheets

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::resolve_url;

lazy_static! {
    static ref CSS_COMMENT: Regex =
        Regex::new(r"(?s)/\*.*?\*/").expect("BUG: hardcoded CSS comment pattern is invalid");

    // @import url("a.css") | url('a.css') | url(a.css) | "a.css" | 'a.css'
    static ref IMPORT_RULE: Regex = Regex::new(
        r#"(?i)@import\s+(?:url\(\s*(?:"([^"]*)"|'([^']*)'|([^)\s]*))\s*\)|"([^"]*)"|'([^']*)')"#
    )
    .expect("BUG: hardcoded @import pattern is invalid");
}

#[must_use]
pub fn strip_css_comments(css: &str) -> Cow<'_, str> {
    CSS_COMMENT.replace_all(css, "")
}

/// Absolute URLs of every `@import` in `css`, in source order
///
/// Relative imports resolve against the stylesheet's own URL. Commented-out
/// rules and imports that fail to resolve are skipped.
#[must_use]
pub fn resolve_import_urls(stylesheet_url: &str, css: &str) -> Vec<String> {
    let stripped = strip_css_comments(css);

    IMPORT_RULE
        .captures_iter(&stripped)
        .filter_map(|caps| (1..=5).find_map(|group| caps.get(group)))
        .map(|m| m.as_str().trim())
        .filter(|href| !href.is_empty())
        .filter_map(|href| match resolve_url(stylesheet_url, href) {
            Ok(url) => Some(url),
            Err(e) => {
                log::debug!("Skipping unresolvable @import {href} in {stylesheet_url}: {e}");
                None
            }
        })
        .collect()
}
