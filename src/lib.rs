pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod scanner;
pub mod utils;

pub use config::{GetCssOptions, GetCssOptionsBuilder};
pub use dispatcher::CssRequest;
pub use engine::{Aggregated, AggregationBarrier, Aggregator, CssResult, CssTask, Link, assemble};
pub use error::GetCssError;
pub use fetcher::{FetchError, FetchFuture, FetchResponse, Fetcher, HttpFetcher};
pub use scanner::{ScannedDocument, scan_document};

/// Collect every stylesheet referenced by `url` into one CSS document
///
/// The URL is validated before anything else happens; use
/// [`CssRequest::new`] to validate without awaiting. `Ok(None)` means the page
/// references no CSS.
///
/// ```no_run
/// # async fn demo() -> Result<(), kodegen_tools_getcss::GetCssError> {
/// use kodegen_tools_getcss::{GetCssOptions, get_css};
///
/// if let Some(result) = get_css("https://example.com", GetCssOptions::default()).await? {
///     println!("{}: {} bytes of CSS", result.page_title, result.css.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn get_css(url: &str, options: GetCssOptions) -> Result<Option<CssResult>, GetCssError> {
    let request = CssRequest::new(url, options)?;
    request.fetch().await
}
