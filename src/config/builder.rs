//! Fluent builder for `GetCssOptions`
//!
//! Every setter is optional; unset values fall back to the defaults in
//! `utils::constants`.

use std::collections::BTreeMap;

use super::types::GetCssOptions;

#[derive(Debug, Clone, Default)]
pub struct GetCssOptionsBuilder {
    options: GetCssOptions,
}

impl GetCssOptions {
    /// Create a builder for configuring `GetCssOptions` with a fluent interface
    #[must_use]
    pub fn builder() -> GetCssOptionsBuilder {
        GetCssOptionsBuilder::default()
    }
}

impl GetCssOptionsBuilder {
    /// Add a single request header, replacing an earlier value for the same name
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.options.headers = headers;
        self
    }

    /// Per-fetch timeout in milliseconds. Zero keeps the default.
    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        if timeout_ms > 0 {
            self.options.timeout_ms = timeout_ms;
        }
        self
    }

    #[must_use]
    pub fn ignore_certs(mut self, ignore: bool) -> Self {
        self.options.ignore_certs = ignore;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    #[must_use]
    pub fn follow_imports(mut self, follow: bool) -> Self {
        self.options.follow_imports = follow;
        self
    }

    #[must_use]
    pub fn max_import_depth(mut self, depth: usize) -> Self {
        self.options.max_import_depth = depth;
        self
    }

    /// Upper bound for a single response body. Zero keeps the default.
    #[must_use]
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        if bytes > 0 {
            self.options.max_body_bytes = bytes;
        }
        self
    }

    #[must_use]
    pub fn build(self) -> GetCssOptions {
        self.options
    }
}
