//! Console rendering of sync events.

use colored::Colorize;
use leadsync_sync::{EventSink, SyncEvent};

/// How many unmatched records are printed before the output is capped.
const UNMATCHED_PREVIEW: usize = 5;

/// Event sink that prints progress to stdout.
///
/// Unmatched-record lines are capped at [`UNMATCHED_PREVIEW`]; the remainder
/// is summarized by [`ConsoleSink::finish`].
#[derive(Debug, Default)]
pub struct ConsoleSink {
    unmatched: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the suppressed-unmatched summary, if any. Call once after a run.
    pub fn finish(&self) {
        if self.unmatched > UNMATCHED_PREVIEW {
            println!(
                "  … and {} more unmatched",
                self.unmatched - UNMATCHED_PREVIEW
            );
        }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &SyncEvent) {
        match event {
            SyncEvent::PageFetched {
                page,
                records,
                accumulated,
            } => {
                println!("  page {page}: {records} records ({accumulated} accumulated)");
            }
            SyncEvent::EarlyExit { page, resolved } => {
                println!(
                    "  {} all {resolved} targets resolved at page {page}",
                    "✓".green()
                );
            }
            SyncEvent::PageCapReached { page_cap } => {
                println!("  {} page cap {page_cap} reached", "!".yellow());
            }
            SyncEvent::PaginationAborted { page, error } => {
                println!("  {} page {page} failed: {error}", "✗".red());
            }
            SyncEvent::WorkspaceCleared { workspace } => {
                println!("  {} cleared existing rows for '{workspace}'", "✓".green());
            }
            SyncEvent::BatchWritten { batch, size } => {
                println!("  {} batch {batch}: {size} rows", "✓".green());
            }
            SyncEvent::BatchFailed { batch, size, error } => {
                println!("  {} batch {batch} ({size} rows) failed: {error}", "✗".red());
            }
            SyncEvent::LeadPatched { .. } => {
                // Per-row success is too chatty for the console; the report
                // carries the total.
            }
            SyncEvent::PatchFailed { email, error } => {
                println!("  {} update failed for {email}: {error}", "✗".red());
            }
            SyncEvent::RecordUnmatched { email } => {
                self.unmatched += 1;
                if self.unmatched <= UNMATCHED_PREVIEW {
                    let label = if email.is_empty() { "(no email)" } else { email };
                    println!("  {} not found remotely: {label}", "·".yellow());
                }
            }
            SyncEvent::Verified { workspace, count } => {
                println!(
                    "  {} '{workspace}' now holds {count} rows",
                    "✓".green()
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
