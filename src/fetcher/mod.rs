//! Fetcher adapter
//!
//! The aggregation engine and the root dispatcher only talk to the network
//! through the `Fetcher` trait. `HttpFetcher` is the reqwest-backed
//! implementation; tests plug in scripted fetchers.

pub mod errors;
pub mod http;

pub use errors::FetchError;
pub use http::HttpFetcher;

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed fetch future
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchResponse, FetchError>> + Send + 'a>>;

/// A fetched body with the bits of the response the dispatcher inspects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Final URL after redirects
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the server labelled the body as a stylesheet
    #[must_use]
    pub fn is_css(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(crate::scanner::is_css_content_type)
    }
}

/// Retrieves the raw body behind a URL
///
/// Non-2xx answers are returned as `Ok` responses; only transport-level
/// failures (connect, timeout, size limit, decoding) are `Err`.
pub trait Fetcher: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}
