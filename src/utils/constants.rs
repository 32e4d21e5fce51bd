//! Shared configuration constants for getcss
//!
//! Default values used by the options builder and the HTTP fetcher so that
//! every entry point agrees on them.

/// Default per-request timeout: 5 seconds
///
/// Applies to every individual fetch (the root document and each stylesheet).
/// The aggregation itself has no overall deadline.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Maximum body size accepted from a single response: 10MB
///
/// Real-world pages and stylesheets are far below this; the limit only guards
/// against endless or hostile responses.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Maximum nesting of `@import` chains followed when import expansion is on
///
/// Stylesheets importing each other in a cycle stop expanding at this depth.
pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 5;

/// Chrome user agent string sent unless the caller supplies one
///
/// Some CDNs serve reduced or empty stylesheets to unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Accept header used for every request
pub const DEFAULT_ACCEPT: &str = "text/html,text/css,*/*;q=0.1";
