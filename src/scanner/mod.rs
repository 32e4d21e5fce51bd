//! Document scanning
//!
//! Discovers CSS sources: inline `<style>` blocks and stylesheet links in HTML,
//! and `@import` rules inside stylesheets.

pub mod document;
pub mod imports;
pub mod sniff;

pub use document::{ScannedDocument, scan_document};
pub use imports::{resolve_import_urls, strip_css_comments};
pub use sniff::{is_css_content_type, is_css_url, is_html, strip_html_comment_markers};
