//! Patch mode: backfill derived fields on existing store rows.
//!
//! Lists the workspace's rows, builds the email → remote-id index (with the
//! existing emails as the early-exit target set), then point-updates the
//! derived conversation URL and remote id on every matched row. Unmatched
//! rows are counted and surfaced as events; a failed update is counted and
//! skipped.

use std::collections::HashSet;

use leadsync_core::{
    conversation_url, remote::truncate_message, LeadPatch, LeadSource, LeadStore, RemoteError,
    WorkspaceName,
};

use crate::event::{EventSink, SyncEvent};
use crate::pager::Pager;
use crate::report::PatchReport;

/// Knobs for one patch run.
#[derive(Debug, Clone)]
pub struct PatchSettings {
    pub workspace: WorkspaceName,
    /// Listing API base, used to derive each row's conversation URL.
    pub bison_base_url: String,
}

/// Run a full patch: list existing rows, build the index, update matches,
/// then read back a count.
///
/// Only the initial listing query can abort — without the existing rows there
/// is nothing to patch. Per-row update failures are skip-and-count.
pub fn run_patch<S, T>(
    source: &S,
    store: &T,
    pager: &Pager,
    settings: &PatchSettings,
    sink: &mut dyn EventSink,
) -> Result<PatchReport, RemoteError>
where
    S: LeadSource,
    T: LeadStore,
{
    let existing = store.list_workspace(&settings.workspace)?;
    let mut report = PatchReport {
        existing: existing.len(),
        ..Default::default()
    };

    if existing.is_empty() {
        tracing::info!("no store rows for '{}'; nothing to patch", settings.workspace);
        return Ok(report);
    }

    let targets: HashSet<String> = existing.iter().filter_map(|row| row.email_key()).collect();
    let index = pager.build_index(source, Some(&targets), sink);

    for row in &existing {
        let Some(key) = row.email_key() else {
            report.unmatched += 1;
            sink.emit(&SyncEvent::RecordUnmatched {
                email: row.lead_email.clone().unwrap_or_default(),
            });
            continue;
        };
        let Some(remote_id) = index.resolve(&key) else {
            report.unmatched += 1;
            sink.emit(&SyncEvent::RecordUnmatched { email: key });
            continue;
        };

        let patch = LeadPatch {
            bison_conversation_url: conversation_url(&settings.bison_base_url, remote_id),
            bison_lead_id: remote_id.to_string(),
        };
        match store.update_lead(&row.id, &patch) {
            Ok(()) => {
                report.updated += 1;
                sink.emit(&SyncEvent::LeadPatched {
                    email: key,
                    remote_id,
                });
            }
            Err(err) => {
                report.failed += 1;
                tracing::warn!("update failed for {key}: {err}");
                sink.emit(&SyncEvent::PatchFailed {
                    email: key,
                    error: truncate_message(&err.to_string()),
                });
            }
        }
    }

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

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use leadsync_core::{LeadPage, LeadRow, PageMeta, RemoteLead, StoredLead};

    use super::*;
    use crate::event::NullSink;
    use crate::pager::PagerSettings;

    fn lead(id: u64, email: Option<&str>) -> RemoteLead {
        RemoteLead {
            id,
            email: email.map(str::to_owned),
            ..Default::default()
        }
    }

    /// Three pages of 2/2/1 leads, last_page = 3, 4 of 5 with emails.
    struct ThreePageSource;

    impl LeadSource for ThreePageSource {
        fn fetch_page(&self, page: u32, _per_page: u32) -> Result<LeadPage, RemoteError> {
            let leads = match page {
                1 => vec![lead(1, Some("a@x.co")), lead(2, Some("b@x.co"))],
                2 => vec![lead(3, None), lead(4, Some("c@x.co"))],
                3 => vec![lead(5, Some("d@x.co"))],
                _ => vec![],
            };
            Ok(LeadPage {
                leads,
                meta: PageMeta {
                    current_page: page,
                    last_page: 3,
                    total: 5,
                },
            })
        }
    }

    #[derive(Default)]
    struct FakeStore {
        rows: Vec<StoredLead>,
        fail_ids: Vec<String>,
        updates: RefCell<Vec<(String, LeadPatch)>>,
    }

    impl LeadStore for FakeStore {
        fn delete_workspace(&self, _: &WorkspaceName) -> Result<(), RemoteError> {
            Ok(())
        }
        fn insert_rows(&self, _: &[LeadRow]) -> Result<(), RemoteError> {
            Ok(())
        }
        fn list_workspace(&self, _: &WorkspaceName) -> Result<Vec<StoredLead>, RemoteError> {
            Ok(self.rows.clone())
        }
        fn update_lead(&self, id: &str, patch: &LeadPatch) -> Result<(), RemoteError> {
            if self.fail_ids.iter().any(|f| f == id) {
                return Err(RemoteError::Status {
                    status: 500,
                    body: "oops".into(),
                });
            }
            self.updates.borrow_mut().push((id.to_string(), patch.clone()));
            Ok(())
        }
        fn count_workspace(&self, _: &WorkspaceName) -> Result<usize, RemoteError> {
            Ok(self.rows.len())
        }
    }

    fn stored(id: &str, email: Option<&str>) -> StoredLead {
        StoredLead {
            id: id.to_string(),
            lead_email: email.map(str::to_owned),
        }
    }

    fn pager() -> Pager {
        Pager::new(PagerSettings {
            page_size: 2,
            page_cap: 500,
            request_delay: Duration::ZERO,
        })
    }

    fn settings() -> PatchSettings {
        PatchSettings {
            workspace: WorkspaceName::from("Acme"),
            bison_base_url: "https://send.example.com/api".into(),
        }
    }

    #[test]
    fn all_matching_rows_are_updated() {
        // Scenario C: 4 indexable remote leads, 4 matching store rows.
        let store = FakeStore {
            rows: vec![
                stored("r1", Some("a@x.co")),
                stored("r2", Some("B@X.CO")),
                stored("r3", Some("c@x.co")),
                stored("r4", Some("d@x.co")),
            ],
            ..Default::default()
        };

        let report =
            run_patch(&ThreePageSource, &store, &pager(), &settings(), &mut NullSink).expect("run");
        assert_eq!(report.existing, 4);
        assert_eq!(report.updated, 4);
        assert_eq!(report.unmatched, 0);
        assert_eq!(report.failed, 0);
        assert_eq!(report.verified, Some(4));

        let updates = store.updates.borrow();
        let (id, patch) = updates.iter().find(|(id, _)| id == "r2").expect("r2 patched");
        assert_eq!(id, "r2");
        assert_eq!(patch.bison_lead_id, "2");
        assert_eq!(
            patch.bison_conversation_url,
            "https://send.example.com/leads/2"
        );
    }

    #[test]
    fn unresolved_and_emailless_rows_are_unmatched() {
        let store = FakeStore {
            rows: vec![
                stored("r1", Some("a@x.co")),
                stored("r2", Some("ghost@x.co")),
                stored("r3", None),
            ],
            ..Default::default()
        };

        let mut events = Vec::new();
        struct Rec<'a>(&'a mut Vec<SyncEvent>);
        impl EventSink for Rec<'_> {
            fn emit(&mut self, event: &SyncEvent) {
                self.0.push(event.clone());
            }
        }

        let report = run_patch(
            &ThreePageSource,
            &store,
            &pager(),
            &settings(),
            &mut Rec(&mut events),
        )
        .expect("run");
        assert_eq!(report.updated, 1);
        assert_eq!(report.unmatched, 2);
        let unmatched = events
            .iter()
            .filter(|e| matches!(e, SyncEvent::RecordUnmatched { .. }))
            .count();
        assert_eq!(unmatched, 2);
    }

    #[test]
    fn update_failure_is_counted_and_skipped() {
        let store = FakeStore {
            rows: vec![stored("r1", Some("a@x.co")), stored("r2", Some("b@x.co"))],
            fail_ids: vec!["r1".to_string()],
            ..Default::default()
        };

        let report =
            run_patch(&ThreePageSource, &store, &pager(), &settings(), &mut NullSink).expect("run");
        assert_eq!(report.updated, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.unmatched, 0);
    }

    #[test]
    fn empty_store_short_circuits_pagination() {
        struct Panicking;
        impl LeadSource for Panicking {
            fn fetch_page(&self, _: u32, _: u32) -> Result<LeadPage, RemoteError> {
                panic!("pagination must not run when there is nothing to patch");
            }
        }

        let store = FakeStore::default();
        let report =
            run_patch(&Panicking, &store, &pager(), &settings(), &mut NullSink).expect("run");
        assert_eq!(report.existing, 0);
        assert_eq!(report.updated, 0);
    }

    #[test]
    fn listing_failure_aborts() {
        struct BrokenStore;
        impl LeadStore for BrokenStore {
            fn delete_workspace(&self, _: &WorkspaceName) -> Result<(), RemoteError> {
                Ok(())
            }
            fn insert_rows(&self, _: &[LeadRow]) -> Result<(), RemoteError> {
                Ok(())
            }
            fn list_workspace(&self, _: &WorkspaceName) -> Result<Vec<StoredLead>, RemoteError> {
                Err(RemoteError::Transport("down".into()))
            }
            fn update_lead(&self, _: &str, _: &LeadPatch) -> Result<(), RemoteError> {
                Ok(())
            }
            fn count_workspace(&self, _: &WorkspaceName) -> Result<usize, RemoteError> {
                Ok(0)
            }
        }

        let err = run_patch(
            &ThreePageSource,
            &BrokenStore,
            &pager(),
            &settings(),
            &mut NullSink,
        )
        .unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
    }
}
