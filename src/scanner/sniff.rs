//! Content sniffing: stylesheet vs HTML

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    // Hardcoded pattern; failure to compile is a bug in this file.
    static ref HTML_MARKUP: Regex = Regex::new(
        r"(?i)<!doctype\s+html|<(?:html|head|body|title|meta|link|style|script|base|div|span|p|a|img|br|hr|table|ul|ol|li|h[1-6]|section|article|nav|header|footer|main|form|iframe|noscript)(?:\s[^>]*)?/?>"
    )
    .expect("BUG: hardcoded HTML sniffing pattern is invalid");
}

/// True when the URL path ends in `.css`
#[must_use]
pub fn is_css_url(url: &str) -> bool {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    path.to_ascii_lowercase().ends_with(".css")
}

/// True for a `text/css` content type, with or without parameters
#[must_use]
pub fn is_css_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("text/css"))
}

/// True when the body contains recognizable HTML markup
#[must_use]
pub fn is_html(body: &str) -> bool {
    HTML_MARKUP.is_match(body)
}

/// Remove `<!--` and `-->` markers, keeping what they wrapped
///
/// Old pages hide style block contents from ancient browsers this way.
#[must_use]
pub fn strip_html_comment_markers(text: &str) -> String {
    text.replace("<!--", "").replace("-->", "")
}
