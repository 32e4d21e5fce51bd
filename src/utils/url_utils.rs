//! URL validation, resolution and normalization utilities.
//!
//! Every URL that ends up on a `Link` or is handed to a fetcher goes through
//! `normalize_url`, so two spellings of the same resource compare equal.

use anyhow::{Context, Result};
use url::Url;

/// Check if a URL is valid
///
/// Only absolute `http`/`https` URLs with a host are accepted.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Normalize an absolute URL
///
/// - scheme and host are lowercased and default ports removed (done by `url`)
/// - the fragment is dropped
/// - `utm_*` tracking parameters are removed and the rest sorted by key
/// - a trailing slash on the path is removed, including the root path
///
/// A leading `www.` on the host is kept.
pub fn normalize_url(input: &str) -> Result<String> {
    let mut parsed = Url::parse(input.trim()).context("Failed to parse URL")?;
    parsed.set_fragment(None);

    if parsed.query().is_some() {
        let mut pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(key, _)| !key.to_ascii_lowercase().starts_with("utm_"))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        if pairs.is_empty() {
            parsed.set_query(None);
        } else {
            let mut query = parsed.query_pairs_mut();
            query.clear();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(path.trim_end_matches('/'));
    }

    let mut normalized = parsed.to_string();
    // `url` always serializes an empty path as "/"
    if parsed.path() == "/" && parsed.query().is_none() && normalized.ends_with('/') {
        normalized.pop();
    }

    Ok(normalized)
}

/// Resolve a potentially relative URL against a base URL and normalize it
pub fn resolve_url(base_url: &str, url: &str) -> Result<String> {
    let base = Url::parse(base_url).context("Invalid base URL")?;
    let resolved = base.join(url.trim()).context("Failed to resolve URL")?;
    normalize_url(resolved.as_str())
}
