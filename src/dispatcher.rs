//! Root request handling
//!
//! Validates the input URL, fetches the root document once and decides
//! whether it is a stylesheet (one link, no scanning) or an HTML page whose
//! CSS sources are scanned and aggregated.

use crate::config::GetCssOptions;
use crate::engine::{Aggregator, CssResult, Link, assemble};
use crate::error::GetCssError;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::scanner::{is_css_url, is_html, scan_document};
use crate::utils::{is_valid_url, normalize_url};

/// A validated request for the CSS behind one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRequest {
    url: String,
    options: GetCssOptions,
}

impl CssRequest {
    /// Validate and normalize `url`
    ///
    /// Runs synchronously and performs no I/O.
    ///
    /// # Errors
    ///
    /// `GetCssError::InvalidUrl` for blank input or anything that is not an
    /// absolute http(s) URL.
    pub fn new(url: &str, options: GetCssOptions) -> Result<Self, GetCssError> {
        if !is_valid_url(url) {
            return Err(GetCssError::InvalidUrl(url.to_string()));
        }
        let normalized =
            normalize_url(url).map_err(|_| GetCssError::InvalidUrl(url.to_string()))?;

        Ok(Self {
            url: normalized,
            options,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn options(&self) -> &GetCssOptions {
        &self.options
    }

    /// Collect the CSS over HTTP
    ///
    /// Returns `Ok(None)` when the page references no CSS at all.
    ///
    /// # Errors
    ///
    /// See `fetch_with`. Building the HTTP client counts as a transport error.
    pub async fn fetch(&self) -> Result<Option<CssResult>, GetCssError> {
        let fetcher = HttpFetcher::new(&self.options).map_err(|source| GetCssError::Transport {
            url: self.url.clone(),
            source,
        })?;
        self.fetch_with(&fetcher).await
    }

    /// Collect the CSS using the given fetcher
    ///
    /// # Errors
    ///
    /// - `GetCssError::Transport` when the root document cannot be fetched
    /// - `GetCssError::BadResponse` when it answers with a non-success status
    ///   and the body is not an HTML page
    pub async fn fetch_with(&self, fetcher: &dyn Fetcher) -> Result<Option<CssResult>, GetCssError> {
        let url = self.url.as_str();
        let verbose = self.options.verbose();

        let response = fetcher.fetch(url).await.map_err(|source| {
            if verbose {
                log::warn!("Error from {url} {source}");
            }
            GetCssError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let is_stylesheet = is_css_url(url) || response.is_css();
        let valid_body = !is_stylesheet && is_html(&response.body);
        if !response.is_success() && !valid_body {
            if verbose {
                log::warn!("Received a {} from: {url}", response.status);
            }
            return Err(GetCssError::BadResponse {
                url: url.to_string(),
                status_code: response.status,
            });
        }

        let aggregator = Aggregator::new(fetcher, &self.options);

        if is_stylesheet {
            log::debug!("{url} is a stylesheet, skipping HTML scan");
            let aggregated = aggregator
                .run_stylesheet(Link::new(url), response)
                .await;
            return Ok(Some(assemble(aggregated, String::new())));
        }

        // Resolve relative links against where the page actually lives
        let scanned = scan_document(&response.body, &response.url);
        let Some(aggregated) = aggregator.run(scanned.tasks).await else {
            log::debug!("No stylesheets found on {url}");
            return Ok(None);
        };

        Ok(Some(assemble(aggregated, scanned.page_title)))
    }
}
