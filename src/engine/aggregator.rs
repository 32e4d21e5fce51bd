//! Concurrent fan-out/fan-in of CSS tasks
//!
//! All stylesheet fetches of a run are driven from one `FuturesUnordered` on
//! the caller's task. Completions arrive in any order; each one writes into
//! the slot of the task it belongs to, so output order is fixed by task index
//! and never by arrival order. State is only touched between polls, so no
//! locking is needed.

use std::future::Future;
use std::pin::Pin;

use futures::StreamExt;
use futures::stream::FuturesUnordered;

use super::types::{AggregationState, CssTask, Link};
use crate::config::GetCssOptions;
use crate::fetcher::{FetchError, FetchResponse, Fetcher};
use crate::scanner::resolve_import_urls;

/// Where a fetched body goes once it arrives
#[derive(Debug, Clone, Copy)]
struct PendingFetch {
    slot: usize,
    link: usize,
    depth: usize,
}

type InFlight<'a> = Pin<
    Box<dyn Future<Output = (PendingFetch, Result<FetchResponse, FetchError>)> + Send + 'a>,
>;

/// Everything a finished run produced, ready for the assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregated {
    pub state: AggregationState,
    /// Top-level links in document order, then nested imports as discovered
    pub links: Vec<Link>,
}

pub struct Aggregator<'a> {
    fetcher: &'a dyn Fetcher,
    follow_imports: bool,
    max_import_depth: usize,
    verbose: bool,
    state: AggregationState,
    links: Vec<Link>,
    in_flight: FuturesUnordered<InFlight<'a>>,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetcher, options: &GetCssOptions) -> Self {
        Self {
            fetcher,
            follow_imports: options.follow_imports(),
            max_import_depth: options.max_import_depth(),
            verbose: options.verbose(),
            state: AggregationState::new(0),
            links: Vec::new(),
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Resolve every task and wait until all of them have settled
    ///
    /// Returns `None` for an empty task list: there is nothing to wait for.
    /// Failed fetches are recorded on their link and never abort the run.
    pub async fn run(mut self, tasks: Vec<CssTask>) -> Option<Aggregated> {
        if tasks.is_empty() {
            log::debug!("No CSS sources to aggregate");
            return None;
        }

        self.state = AggregationState::new(tasks.len());
        for (slot, task) in tasks.into_iter().enumerate() {
            match task {
                CssTask::Literal(text) => {
                    self.state.buffer.append(slot, text);
                    self.complete_one();
                }
                CssTask::LinkRef(link) => {
                    let link = self.push_link(link);
                    self.dispatch(PendingFetch {
                        slot,
                        link,
                        depth: 0,
                    });
                }
            }
        }

        Some(self.drive().await)
    }

    /// Aggregate a stylesheet that was already fetched as the root document
    ///
    /// Imports are resolved against `response.url`, where the stylesheet
    /// was finally served from.
    pub async fn run_stylesheet(mut self, link: Link, response: FetchResponse) -> Aggregated {
        self.state = AggregationState::new(1);
        let link = self.push_link(link);
        self.on_fetched(
            PendingFetch {
                slot: 0,
                link,
                depth: 0,
            },
            &response.url,
            response.body,
        );
        self.drive().await
    }

    async fn drive(mut self) -> Aggregated {
        while !self.state.barrier.is_signaled() {
            let Some((pending, outcome)) = self.in_flight.next().await else {
                break;
            };

            match outcome {
                Ok(response) if response.is_success() => {
                    self.on_fetched(pending, &response.url, response.body);
                }
                Ok(response) => {
                    let error = FetchError::HttpError {
                        url: self.links[pending.link].url.clone(),
                        status: response.status,
                    };
                    self.on_failed(pending, error);
                }
                Err(error) => self.on_failed(pending, error),
            }
        }

        debug_assert!(self.state.barrier.is_signaled(), "aggregation ended unsignaled");
        debug_assert!(self.in_flight.is_empty(), "aggregation signaled with fetches in flight");

        Aggregated {
            state: self.state,
            links: self.links,
        }
    }

    fn push_link(&mut self, link: Link) -> usize {
        self.links.push(link);
        self.links.len() - 1
    }

    fn dispatch(&mut self, pending: PendingFetch) {
        let url = self.links[pending.link].url.clone();
        let fetcher = self.fetcher;
        log::debug!("Fetching stylesheet {url} for slot {}", pending.slot);

        self.in_flight.push(Box::pin(async move {
            let outcome = fetcher.fetch(&url).await;
            (pending, outcome)
        }));
    }

    /// `base_url` is the URL the body was served from after redirects
    fn on_fetched(&mut self, pending: PendingFetch, base_url: &str, body: String) {
        let imports = if self.follow_imports && pending.depth < self.max_import_depth {
            resolve_import_urls(base_url, &body)
        } else {
            Vec::new()
        };

        self.links[pending.link].css.push_str(&body);
        self.state.buffer.append(pending.slot, body);

        // The total must cover the imports before any of them can complete
        self.state.barrier.expand(imports.len());
        for url in &imports {
            let link = self.push_link(Link::new(url.clone()));
            self.dispatch(PendingFetch {
                slot: pending.slot,
                link,
                depth: pending.depth + 1,
            });
        }
        if !imports.is_empty() {
            log::debug!(
                "{} imports {} stylesheets",
                self.links[pending.link].url,
                imports.len()
            );
            self.links[pending.link].imports = imports;
        }

        self.complete_one();
    }

    fn on_failed(&mut self, pending: PendingFetch, error: FetchError) {
        let link = &mut self.links[pending.link];
        if self.verbose {
            log::warn!("Failed to fetch stylesheet {}: {error}", link.url);
        } else {
            log::debug!("Failed to fetch stylesheet {}: {error}", link.url);
        }
        link.error = Some(error);
        self.complete_one();
    }

    fn complete_one(&mut self) {
        if self.state.barrier.complete_one() {
            log::debug!(
                "All {} CSS sources settled ({} links)",
                self.state.barrier.expected_total(),
                self.links.len()
            );
        }
    }
}
