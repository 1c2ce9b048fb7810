//! `leadsync sync` — replace a workspace's store rows from the listing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use leadsync_api::{BisonClient, RetryPolicy, StoreClient};
use leadsync_sync::{run_replace, Pager, PagerSettings, ReplaceSettings};

use crate::console::ConsoleSink;

/// Arguments for `leadsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Workspace label as declared in the config file.
    pub workspace: String,

    /// Config file path (default: ./leadsync.yaml, then ~/.leadsync/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fetch and report what would be written without touching the store.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let (config, ws) = super::load_workspace(self.config, &self.workspace)?;
        let retry = RetryPolicy::from(&config.defaults.retry);
        let source = BisonClient::new(&ws.bison, ws.workspace_id, ws.interested_tag_id, retry);
        let store = StoreClient::new(&ws.store, retry);
        let pager = Pager::new(PagerSettings::from(&config.defaults));

        let settings = ReplaceSettings {
            workspace: ws.name.clone().into(),
            bison_base_url: ws.bison.base_url.clone(),
            lead_value: ws.lead_value,
            batch_size: config.defaults.batch_size,
            dry_run: self.dry_run,
        };

        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        println!("{prefix}Syncing '{}'…", ws.name);

        let mut sink = ConsoleSink::new();
        let report = run_replace(&source, &store, &pager, &settings, &mut sink)
            .with_context(|| format!("sync failed for '{}'", ws.name))?;
        sink.finish();

        if report.fetched == 0 {
            println!("{prefix}{} no remote leads found — store untouched", "✓".green());
            return Ok(());
        }
        if self.dry_run {
            println!(
                "{prefix}{} would replace '{}' with {} rows",
                "✓".green(),
                ws.name,
                report.fetched
            );
            return Ok(());
        }

        println!(
            "{} '{}' synced ({} inserted, {} failed across {} batch(es))",
            "✓".green(),
            ws.name,
            report.inserted,
            report.failed_rows,
            report.failed_batches,
        );
        Ok(())
    }
}
