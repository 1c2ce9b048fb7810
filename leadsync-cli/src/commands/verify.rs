//! `leadsync verify` — scoped read-back count.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use leadsync_api::{RetryPolicy, StoreClient};
use leadsync_core::LeadStore;

/// Arguments for `leadsync verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Workspace label as declared in the config file.
    pub workspace: String,

    /// Config file path (default: ./leadsync.yaml, then ~/.leadsync/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl VerifyArgs {
    pub fn run(self) -> Result<()> {
        let (config, ws) = super::load_workspace(self.config, &self.workspace)?;
        let retry = RetryPolicy::from(&config.defaults.retry);
        let store = StoreClient::new(&ws.store, retry);

        let count = store
            .count_workspace(&ws.name.clone().into())
            .with_context(|| format!("count query failed for '{}'", ws.name))?;

        println!("{} '{}' holds {count} rows", "✓".green(), ws.name);
        Ok(())
    }
}
