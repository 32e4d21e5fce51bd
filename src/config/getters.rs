//! Getter methods for `GetCssOptions`
//!
//! This module provides the accessor methods for retrieving configuration
//! values from a `GetCssOptions` instance.

use std::collections::BTreeMap;
use std::time::Duration;

use super::types::GetCssOptions;
use crate::utils::{DEFAULT_MAX_BODY_BYTES, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

impl GetCssOptions {
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Headers actually sent: the caller's headers plus a default
    /// `User-Agent` unless one is already present (any casing).
    #[must_use]
    pub fn effective_headers(&self) -> BTreeMap<String, String> {
        let mut headers = self.headers.clone();
        let has_user_agent = headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case("user-agent"));
        if !has_user_agent {
            headers.insert("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string());
        }
        headers
    }

    /// Per-fetch timeout in milliseconds. Zero means the default.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        if self.timeout_ms == 0 {
            DEFAULT_TIMEOUT_MS
        } else {
            self.timeout_ms
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms())
    }

    /// Responses are always requested with gzip enabled
    #[must_use]
    pub const fn gzip(&self) -> bool {
        true
    }

    #[must_use]
    pub fn ignore_certs(&self) -> bool {
        self.ignore_certs
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn follow_imports(&self) -> bool {
        self.follow_imports
    }

    #[must_use]
    pub fn max_import_depth(&self) -> usize {
        self.max_import_depth
    }

    /// Zero means the default limit
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        if self.max_body_bytes == 0 {
            DEFAULT_MAX_BODY_BYTES
        } else {
            self.max_body_bytes
        }
    }
}
