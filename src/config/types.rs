//! Core configuration types for stylesheet collection
//!
//! This module contains the `GetCssOptions` struct that carries the request
//! configuration shared by the root fetch and every stylesheet fetch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_IMPORT_DEPTH, DEFAULT_TIMEOUT_MS};

/// Options for a single stylesheet collection run
///
/// Deserializes from camelCase JSON where every field is optional:
///
/// ```
/// use kodegen_tools_getcss::GetCssOptions;
///
/// let options = GetCssOptions::from_json(r#"{"timeoutMs": 2000, "verbose": true}"#).unwrap();
/// assert_eq!(options.timeout_ms(), 2000);
/// assert!(!options.ignore_certs());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetCssOptions {
    /// Extra request headers. A default `User-Agent` is merged in when the
    /// caller does not provide one (see `effective_headers`).
    pub(crate) headers: BTreeMap<String, String>,

    /// Timeout in milliseconds for each individual fetch
    ///
    /// Default: 5000. Zero is read as the default.
    pub(crate) timeout_ms: u64,

    /// Skip TLS certificate validation for this request only
    ///
    /// Only the HTTP client built for this run is affected; nothing
    /// process-wide is changed.
    pub(crate) ignore_certs: bool,

    /// Log fetch errors and unexpected status codes at `warn` instead of `debug`
    pub(crate) verbose: bool,

    /// Follow `@import` statements found inside fetched stylesheets
    ///
    /// Default: false
    pub(crate) follow_imports: bool,

    /// Maximum `@import` nesting followed when `follow_imports` is set
    pub(crate) max_import_depth: usize,

    /// Upper bound for a single response body. Zero is read as the default.
    pub(crate) max_body_bytes: usize,
}

impl Default for GetCssOptions {
    fn default() -> Self {
        Self {
            headers: BTreeMap::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            ignore_certs: false,
            verbose: false,
            follow_imports: false,
            max_import_depth: DEFAULT_MAX_IMPORT_DEPTH,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GetCssOptions {
    /// Parse options from a JSON document
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
