//! Error types for stylesheet collection
//!
//! Only failures of the root request surface here. A stylesheet that cannot
//! be fetched is recorded on its `Link` and the run carries on.

use crate::fetcher::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetCssError {
    /// Input was blank or not an absolute http(s) URL; no request was made
    #[error("getcss expected an absolute http(s) url, got {0:?}")]
    InvalidUrl(String),

    /// The root document could not be fetched at all
    #[error("Error from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The root document answered with a non-success status and no usable body
    #[error("Received a {status_code} from: {url}")]
    BadResponse { url: String, status_code: u16 },
}

impl GetCssError {
    /// URL the error refers to
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl(url) | Self::Transport { url, .. } | Self::BadResponse { url, .. } => {
                url
            }
        }
    }

    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadResponse { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
