//! Workspace configuration.
//!
//! Replaces the constants the original operational scripts hardcoded: base
//! URLs, bearer tokens, workspace identifiers, and the pacing knobs. Loaded
//! from YAML:
//!
//! ```yaml
//! defaults:
//!   page_size: 100
//!   batch_size: 50
//!   request_delay_ms: 200
//!   page_cap: 500
//!   retry:
//!     max_attempts: 3
//!     base_delay_ms: 500
//! workspaces:
//!   - name: "David Amiri"
//!     workspace_id: 25
//!     interested_tag_id: 190
//!     bison:
//!       base_url: https://send.example.com/api
//!       api_key: "..."
//!     store:
//!       base_url: https://example.supabase.co
//!       api_key: "..."
//! ```
//!
//! Lookup order when no `--config` is given: `./leadsync.yaml`, then
//! `<home>/.leadsync/config.yaml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Retry policy knobs, shared by every remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}

/// Pagination and batching defaults applied to every workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Safety bound on the pagination loop — stops runaway iteration against
    /// a misbehaving endpoint.
    #[serde(default = "default_page_cap")]
    pub page_cap: u32,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            page_size: default_page_size(),
            batch_size: default_batch_size(),
            request_delay_ms: default_request_delay_ms(),
            page_cap: default_page_cap(),
            retry: RetryConfig::default(),
        }
    }
}

impl Defaults {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

fn default_page_size() -> u32 {
    100
}
fn default_batch_size() -> usize {
    50
}
fn default_request_delay_ms() -> u64 {
    200
}
fn default_page_cap() -> u32 {
    500
}
fn default_max_attempts() -> u32 {
    3
}
fn default_base_delay_ms() -> u64 {
    500
}
fn default_lead_value() -> u32 {
    500
}

/// One remote endpoint: base URL plus bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub api_key: String,
}

/// A synced workspace: the listing-side identifiers plus both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub name: String,
    pub workspace_id: u64,
    /// Listing-side tag filter; when set, only leads carrying the tag are
    /// fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interested_tag_id: Option<u64>,
    /// Dollar value recorded on each inserted lead row.
    #[serde(default = "default_lead_value")]
    pub lead_value: u32,
    pub bison: EndpointConfig,
    pub store: EndpointConfig,
}

/// Root of the leadsync YAML config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceConfig>,
}

impl Config {
    /// Load the config from an explicit path.
    ///
    /// Returns [`ConfigError::NotFound`] if absent, [`ConfigError::Parse`]
    /// (with path + line context) if malformed YAML.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Resolve a config path: the explicit `--config` value when given,
    /// otherwise `./leadsync.yaml` when present, otherwise
    /// `<home>/.leadsync/config.yaml`.
    pub fn resolve_path(explicit: Option<PathBuf>, home: &Path) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }
        let local = PathBuf::from("leadsync.yaml");
        if local.exists() {
            return local;
        }
        home.join(".leadsync").join("config.yaml")
    }

    /// Find a workspace by its label.
    pub fn workspace(&self, name: &str) -> Result<&WorkspaceConfig, ConfigError> {
        self.workspaces
            .iter()
            .find(|w| w.name == name)
            .ok_or_else(|| ConfigError::UnknownWorkspace {
                name: name.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
