pub mod link;
pub mod reconcile;
pub mod sync;
pub mod verify;

use std::path::PathBuf;

use anyhow::{Context, Result};
use leadsync_core::{Config, WorkspaceConfig};

/// Load the config and select a workspace — shared by the remote commands.
pub(crate) fn load_workspace(
    config_flag: Option<PathBuf>,
    workspace: &str,
) -> Result<(Config, WorkspaceConfig)> {
    let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
    let path = Config::resolve_path(config_flag, &home);
    let config = Config::load(&path).with_context(|| format!("loading {}", path.display()))?;
    let ws = config
        .workspace(workspace)
        .with_context(|| format!("selecting workspace '{workspace}'"))?
        .clone();
    Ok((config, ws))
}
