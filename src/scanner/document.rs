//! HTML document scanning
//!
//! Turns a fetched HTML page into its title and the ordered list of CSS tasks
//! (inline `<style>` text or stylesheet links) in document order.

use lazy_static::lazy_static;
use scraper::{Html, Selector};

use super::sniff::strip_html_comment_markers;
use crate::engine::types::{CssTask, Link};
use crate::utils::resolve_url;

lazy_static! {
    // These selectors are hardcoded and syntactically valid CSS selectors.
    // If they fail to parse, it indicates a compile-time bug in the selector strings.
    static ref STYLESHEET_SELECTOR: Selector =
        Selector::parse(r#"style, [rel~="stylesheet"]"#)
            .expect("BUG: hardcoded selector 'style, [rel~=\"stylesheet\"]' is invalid");

    static ref TITLE_SELECTOR: Selector =
        Selector::parse("head > title")
            .expect("BUG: hardcoded selector 'head > title' is invalid");
}

/// Result of scanning one HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDocument {
    /// Text of the first `head > title`, empty when absent
    pub page_title: String,
    /// CSS tasks in document order; the index is the output position
    pub tasks: Vec<CssTask>,
}

/// Scan an HTML body for inline styles and stylesheet links
///
/// Elements with a non-blank `href` become `CssTask::LinkRef` with the href
/// resolved against `base_url`; every other match becomes a
/// `CssTask::Literal` holding its text with HTML comment markers removed.
/// Scanning has no side effects, so the same input always yields the same
/// tasks.
#[must_use]
pub fn scan_document(html: &str, base_url: &str) -> ScannedDocument {
    let document = Html::parse_document(html);

    let page_title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect::<String>())
        .unwrap_or_default();

    let mut tasks = Vec::new();
    for element in document.select(&STYLESHEET_SELECTOR) {
        let href = element
            .value()
            .attr("href")
            .filter(|href| !href.trim().is_empty());

        match href {
            Some(href) => match resolve_url(base_url, href) {
                Ok(url) => tasks.push(CssTask::LinkRef(Link::new(url))),
                Err(e) => log::warn!("Failed to resolve stylesheet URL {href}: {e}"),
            },
            None => {
                let text: String = element.text().collect();
                tasks.push(CssTask::Literal(strip_html_comment_markers(&text)));
            }
        }
    }

    log::debug!("Found {} CSS sources in {base_url}", tasks.len());

    ScannedDocument { page_title, tasks }
}
