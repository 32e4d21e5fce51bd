//! Type definitions for CSS aggregation

use serde::{Deserialize, Serialize};

use super::barrier::AggregationBarrier;
use crate::fetcher::FetchError;

/// A stylesheet reference and whatever was fetched for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute, normalized URL. Duplicates across links are allowed.
    pub url: String,
    /// Fetched stylesheet text, empty until the fetch succeeds
    pub css: String,
    /// `@import` targets found in `css`; only filled when import following is on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchError>,
}

impl Link {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            css: String::new(),
            imports: Vec::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// One unit of CSS to resolve; its position in the task list is its output position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssTask {
    /// Inline CSS already at hand
    Literal(String),
    /// A stylesheet that has to be fetched
    LinkRef(Link),
}

/// Output fragments collected for one task index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CssSlot {
    #[default]
    Empty,
    Single(String),
    /// Used once nested imports add to a slot that already holds CSS
    Multiple(Vec<String>),
}

impl CssSlot {
    fn push(&mut self, css: String) {
        *self = match std::mem::take(self) {
            Self::Empty => Self::Single(css),
            Self::Single(first) => Self::Multiple(vec![first, css]),
            Self::Multiple(mut all) => {
                all.push(css);
                Self::Multiple(all)
            }
        };
    }

    fn fragments(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Single(css) => std::slice::from_ref(css),
            Self::Multiple(all) => all,
        }
    }
}

/// Index-addressed output buffer, one slot per top-level task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultBuffer {
    slots: Vec<CssSlot>,
}

impl ResultBuffer {
    #[must_use]
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![CssSlot::Empty; count],
        }
    }

    /// Add a fragment to slot `index`, after anything already there
    pub fn append(&mut self, index: usize, css: String) {
        match self.slots.get_mut(index) {
            Some(slot) => slot.push(css),
            None => log::warn!("Dropping CSS for unknown slot {index}"),
        }
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&CssSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fragments in slot order, each slot's fragments in arrival order
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .flat_map(CssSlot::fragments)
            .map(String::as_str)
    }

    #[must_use]
    pub fn concat(&self) -> String {
        self.fragments().collect()
    }
}

/// Mutable state of one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationState {
    pub barrier: AggregationBarrier,
    pub buffer: ResultBuffer,
}

impl AggregationState {
    #[must_use]
    pub fn new(task_count: usize) -> Self {
        Self {
            barrier: AggregationBarrier::new(task_count),
            buffer: ResultBuffer::with_slots(task_count),
        }
    }
}
