//! reqwest-backed fetcher
//!
//! One `HttpFetcher` is built per collection run from its `GetCssOptions`, so
//! headers, timeout and the certificate policy apply to that run only.
//!
//! ```ignore
//! use kodegen_tools_getcss::fetcher::{Fetcher, HttpFetcher};
//! use kodegen_tools_getcss::GetCssOptions;
//!
//! let fetcher = HttpFetcher::new(&GetCssOptions::default())?;
//! let response = fetcher.fetch("https://example.com/style.css").await?;
//! ```

use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use super::{FetchError, FetchFuture, FetchResponse, Fetcher};
use crate::config::GetCssOptions;
use crate::utils::DEFAULT_ACCEPT;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_ms: u64,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Build a client from the run's options
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidHeader` for header names or values that
    /// cannot be sent, and `FetchError::ClientBuild` if the TLS backend fails
    /// to initialize.
    pub fn new(options: &GetCssOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));

        for (name, value) in options.effective_headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| FetchError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| FetchError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout())
            .gzip(options.gzip())
            .danger_accept_invalid_certs(options.ignore_certs())
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: options.timeout_ms(),
            max_body_bytes: options.max_body_bytes(),
        })
    }

    fn request_error(&self, url: &str, error: &reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            FetchError::RequestFailed(format!("{url}: {error}"))
        }
    }

    async fn fetch_core(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(url, &e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Enforce the limit BEFORE downloading when the server announces a size
        let expected_size = response.content_length().unwrap_or(0);
        if expected_size > self.max_body_bytes as u64 {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                limit: self.max_body_bytes,
            });
        }

        let mut buffer = if expected_size > 0 {
            Vec::with_capacity(expected_size as usize)
        } else {
            Vec::new()
        };

        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| self.request_error(url, &e))?;

            if buffer.len() + chunk.len() > self.max_body_bytes {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    limit: self.max_body_bytes,
                });
            }
            buffer.extend_from_slice(&chunk);
        }

        log::debug!("Fetched {url}: HTTP {status}, {} bytes", buffer.len());

        Ok(FetchResponse {
            url: final_url,
            status,
            content_type,
            body: String::from_utf8_lossy(&buffer).into_owned(),
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(self.fetch_core(url))
    }
}
