//! Final result assembly

use serde::{Deserialize, Serialize};

use super::aggregator::Aggregated;
use super::types::Link;

/// Everything collected for one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssResult {
    /// Empty when the page has no title or the URL was a stylesheet
    pub page_title: String,
    pub links: Vec<Link>,
    /// All CSS in document order
    pub css: String,
}

impl CssResult {
    /// Links whose fetch failed; their CSS is missing from `css`
    pub fn failed_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| link.is_failed())
    }

    /// Serialize with camelCase keys (`pageTitle`, `links`, `css`)
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Concatenate the buffer in slot order and attach title and links unchanged
#[must_use]
pub fn assemble(aggregated: Aggregated, page_title: impl Into<String>) -> CssResult {
    CssResult {
        page_title: page_title.into(),
        css: aggregated.state.buffer.concat(),
        links: aggregated.links,
    }
}
