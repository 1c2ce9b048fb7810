//! Pagination walker for the remote listing endpoint.
//!
//! Termination precedence per page:
//! 1. the page contains zero records;
//! 2. the reported last page is reached or exceeded;
//! 3. early exit — every target key already resolved;
//! plus a page-cap safety bound checked before each fetch.
//!
//! A fetch failure aborts the walk; whatever was accumulated so far is used
//! as-is.

use std::collections::HashSet;
use std::time::Duration;

use leadsync_core::{remote::truncate_message, Defaults, LeadSource, RemoteLead};

use crate::event::{EventSink, SyncEvent};
use crate::index::LookupIndex;

/// Pacing and bounds for one pagination walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerSettings {
    pub page_size: u32,
    pub page_cap: u32,
    pub request_delay: Duration,
}

impl From<&Defaults> for PagerSettings {
    fn from(defaults: &Defaults) -> Self {
        PagerSettings {
            page_size: defaults.page_size,
            page_cap: defaults.page_cap,
            request_delay: defaults.request_delay(),
        }
    }
}

/// What a page fold reports back to the walker.
pub struct PageOutcome {
    /// Running size of the accumulation after this page.
    pub accumulated: usize,
    /// `Some(resolved)` when every target key is now resolved and the walk
    /// should stop before fetching further pages.
    pub early_exit: Option<usize>,
}

/// Walks listing pages from 1 until a termination condition fires.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    settings: PagerSettings,
}

impl Pager {
    pub fn new(settings: PagerSettings) -> Self {
        Pager { settings }
    }

    /// Walk pages, handing each page's records to `on_page`. Returns the
    /// number of pages fetched (failed fetch included).
    pub fn walk<S, F>(&self, source: &S, sink: &mut dyn EventSink, mut on_page: F) -> u32
    where
        S: LeadSource,
        F: FnMut(Vec<RemoteLead>) -> PageOutcome,
    {
        let mut page = 1u32;
        let mut fetched = 0u32;

        loop {
            if page > self.settings.page_cap {
                tracing::warn!("page cap {} reached; stopping walk", self.settings.page_cap);
                sink.emit(&SyncEvent::PageCapReached {
                    page_cap: self.settings.page_cap,
                });
                break;
            }

            let result = source.fetch_page(page, self.settings.page_size);
            fetched += 1;

            let chunk = match result {
                Ok(chunk) => chunk,
                Err(err) => {
                    tracing::warn!("page {page} fetch failed: {err}");
                    sink.emit(&SyncEvent::PaginationAborted {
                        page,
                        error: truncate_message(&err.to_string()),
                    });
                    break;
                }
            };

            if chunk.leads.is_empty() {
                tracing::debug!("page {page} empty; end of data");
                break;
            }

            let records = chunk.leads.len();
            let outcome = on_page(chunk.leads);
            sink.emit(&SyncEvent::PageFetched {
                page,
                records,
                accumulated: outcome.accumulated,
            });

            if page >= chunk.meta.last_page {
                break;
            }
            if let Some(resolved) = outcome.early_exit {
                tracing::debug!("all {resolved} targets resolved at page {page}");
                sink.emit(&SyncEvent::EarlyExit { page, resolved });
                break;
            }

            if !self.settings.request_delay.is_zero() {
                std::thread::sleep(self.settings.request_delay);
            }
            page += 1;
        }

        fetched
    }

    /// Build a [`LookupIndex`] across all pages.
    ///
    /// When `targets` is given, the walk stops as soon as every target key
    /// resolves — the early-exit optimization for patch mode, where only the
    /// store's existing emails matter.
    pub fn build_index<S: LeadSource>(
        &self,
        source: &S,
        targets: Option<&HashSet<String>>,
        sink: &mut dyn EventSink,
    ) -> LookupIndex {
        let mut index = LookupIndex::new();
        self.walk(source, sink, |leads| {
            for lead in &leads {
                index.add(lead);
            }
            let early_exit = targets.and_then(|targets| {
                let resolved = targets.iter().filter(|t| index.contains_key(t)).count();
                (resolved >= targets.len()).then_some(resolved)
            });
            PageOutcome {
                accumulated: index.len(),
                early_exit,
            }
        });
        index
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
