//! Run summaries returned by the sync agent.

/// Outcome of a replace-mode run (delete-all-then-insert).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplaceReport {
    /// Remote leads fetched and transformed.
    pub fetched: usize,
    /// Rows successfully inserted.
    pub inserted: usize,
    /// Rows in batches that failed (counted, never retried).
    pub failed_rows: usize,
    /// Number of batches that failed.
    pub failed_batches: usize,
    /// Skipped delete/insert because `--dry-run` was set.
    pub dry_run: bool,
    /// Read-back row count, when the verification query succeeded.
    pub verified: Option<usize>,
}

/// Outcome of a patch-mode run (per-row point updates).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchReport {
    /// Existing store rows considered.
    pub existing: usize,
    /// Rows updated with the derived URL and remote id.
    pub updated: usize,
    /// Rows whose email resolved to no remote lead.
    pub unmatched: usize,
    /// Rows whose point update failed (counted, skipped).
    pub failed: usize,
    /// Read-back row count, when the verification query succeeded.
    pub verified: Option<usize>,
}
