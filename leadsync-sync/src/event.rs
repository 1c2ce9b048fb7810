//! Structured sync events.
//!
//! Every observable step of a run is emitted as a [`SyncEvent`] through an
//! [`EventSink`], so any collaborator (console, file, metrics) can consume
//! progress without the agent knowing how it is rendered.

use leadsync_core::WorkspaceName;

/// One observable step of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A listing page was fetched and folded into the accumulation.
    PageFetched {
        page: u32,
        records: usize,
        /// Running size of the index / record set after this page.
        accumulated: usize,
    },
    /// Pagination stopped early because every target key was resolved.
    EarlyExit { page: u32, resolved: usize },
    /// Pagination stopped at the configured safety bound.
    PageCapReached { page_cap: u32 },
    /// A page fetch failed; the walk aborted with a partial accumulation.
    PaginationAborted { page: u32, error: String },
    /// All existing rows for the workspace were deleted ahead of reinsert.
    WorkspaceCleared { workspace: WorkspaceName },
    /// One insert batch was written.
    BatchWritten { batch: usize, size: usize },
    /// One insert batch failed; its rows are counted as failed and skipped.
    BatchFailed { batch: usize, size: usize, error: String },
    /// One existing row was patched with the derived URL and remote id.
    LeadPatched { email: String, remote_id: u64 },
    /// A point update failed; the row is counted and skipped.
    PatchFailed { email: String, error: String },
    /// An existing row's email resolved to no remote lead.
    RecordUnmatched { email: String },
    /// Read-back row count after the write phase (observability only).
    Verified { workspace: WorkspaceName, count: usize },
}

/// Consumer of [`SyncEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: &SyncEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &SyncEvent) {}
}
