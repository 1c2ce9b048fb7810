//! `leadsync link` — backfill derived fields on existing store rows.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use leadsync_api::{BisonClient, RetryPolicy, StoreClient};
use leadsync_sync::{run_patch, Pager, PagerSettings, PatchSettings};

use crate::console::ConsoleSink;

/// Arguments for `leadsync link`.
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Workspace label as declared in the config file.
    pub workspace: String,

    /// Config file path (default: ./leadsync.yaml, then ~/.leadsync/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl LinkArgs {
    pub fn run(self) -> Result<()> {
        let (config, ws) = super::load_workspace(self.config, &self.workspace)?;
        let retry = RetryPolicy::from(&config.defaults.retry);
        let source = BisonClient::new(&ws.bison, ws.workspace_id, ws.interested_tag_id, retry);
        let store = StoreClient::new(&ws.store, retry);
        let pager = Pager::new(PagerSettings::from(&config.defaults));

        let settings = PatchSettings {
            workspace: ws.name.clone().into(),
            bison_base_url: ws.bison.base_url.clone(),
        };

        println!("Linking '{}'…", ws.name);

        let mut sink = ConsoleSink::new();
        let report = run_patch(&source, &store, &pager, &settings, &mut sink)
            .with_context(|| format!("link failed for '{}'", ws.name))?;
        sink.finish();

        if report.existing == 0 {
            println!("{} no store rows for '{}' — nothing to link", "✓".green(), ws.name);
            return Ok(());
        }

        println!(
            "{} '{}' linked ({} updated, {} unmatched, {} failed)",
            "✓".green(),
            ws.name,
            report.updated,
            report.unmatched,
            report.failed,
        );
        Ok(())
    }
}
