//! Error types for fetch operations

/// Error type for a single fetch
///
/// Recorded on a `Link` when one of its stylesheet fetches fails, so it is
/// cloneable and serializable alongside the rest of the result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("HTTP error {status}: {url}")]
    HttpError { url: String, status: u16 },

    #[error("Response from {url} exceeded {limit} bytes")]
    TooLarge { url: String, limit: usize },

    #[error("Invalid header {0}")]
    InvalidHeader(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl FetchError {
    /// HTTP status carried by the error, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
