//! Replace mode: delete the workspace's store rows, reinsert from the listing.
//!
//! Write-phase failure semantics: a failed insert batch is reported (with a
//! truncated error) and its rows counted as failed; the run continues with
//! the next batch. There is no rollback and no retry beyond the client's own
//! policy — an interrupted run leaves the store partially updated, which is
//! an accepted inconsistency window.

use leadsync_core::{
    remote::truncate_message, LeadRow, LeadSource, LeadStore, RemoteError, RemoteLead,
    WorkspaceName,
};

use crate::event::{EventSink, SyncEvent};
use crate::pager::{PageOutcome, Pager};
use crate::report::ReplaceReport;

/// Knobs for one replace run.
#[derive(Debug, Clone)]
pub struct ReplaceSettings {
    pub workspace: WorkspaceName,
    /// Listing API base, used to derive each row's conversation URL.
    pub bison_base_url: String,
    pub lead_value: u32,
    pub batch_size: usize,
    pub dry_run: bool,
}

/// Run a full replace: paginate, transform, delete scoped rows, insert in
/// batches, then read back a count.
///
/// Only the scoped delete can abort the run — inserting after a failed delete
/// would duplicate rows. Everything downstream is skip-and-count.
pub fn run_replace<S, T>(
    source: &S,
    store: &T,
    pager: &Pager,
    settings: &ReplaceSettings,
    sink: &mut dyn EventSink,
) -> Result<ReplaceReport, RemoteError>
where
    S: LeadSource,
    T: LeadStore,
{
    let mut report = ReplaceReport {
        dry_run: settings.dry_run,
        ..Default::default()
    };

    // Phase 1: accumulate the transformed record set across all pages.
    let mut rows: Vec<LeadRow> = Vec::new();
    pager.walk(source, sink, |leads: Vec<RemoteLead>| {
        for lead in leads {
            rows.push(LeadRow::from_remote(
                lead,
                &settings.workspace,
                &settings.bison_base_url,
                settings.lead_value,
            ));
        }
        PageOutcome {
            accumulated: rows.len(),
            early_exit: None,
        }
    });
    report.fetched = rows.len();

    // Nothing fetched is a normal outcome; leave the store untouched.
    if rows.is_empty() {
        tracing::info!("no remote leads for '{}'; store left as-is", settings.workspace);
        return Ok(report);
    }

    if settings.dry_run {
        return Ok(report);
    }

    // Phase 2: delete-all-then-insert.
    store.delete_workspace(&settings.workspace)?;
    sink.emit(&SyncEvent::WorkspaceCleared {
        workspace: settings.workspace.clone(),
    });

    // A zero batch size from the config would make chunks() panic.
    let batch_size = settings.batch_size.max(1);
    for (batch_no, batch) in rows.chunks(batch_size).enumerate() {
        match store.insert_rows(batch) {
            Ok(()) => {
                report.inserted += batch.len();
                sink.emit(&SyncEvent::BatchWritten {
                    batch: batch_no + 1,
                    size: batch.len(),
                });
            }
            Err(err) => {
                report.failed_rows += batch.len();
                report.failed_batches += 1;
                tracing::warn!("batch {} failed: {err}", batch_no + 1);
                sink.emit(&SyncEvent::BatchFailed {
                    batch: batch_no + 1,
                    size: batch.len(),
                    error: truncate_message(&err.to_string()),
                });
            }
        }
    }

    // Phase 3: read-back count, observability only.
    match store.count_workspace(&settings.workspace) {
        Ok(count) => {
            report.verified = Some(count);
            sink.emit(&SyncEvent::Verified {
                workspace: settings.workspace.clone(),
                count,
            });
        }
        Err(err) => tracing::warn!("verification query failed: {err}"),
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
