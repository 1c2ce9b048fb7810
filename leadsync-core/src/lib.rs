//! Leadsync core library — domain types, tabular model, reconciler,
//! configuration, errors, and the remote client seams.
//!
//! Public API surface:
//! - [`types`] — newtypes and remote/store record structs
//! - [`table`] — ordered CSV tabular model
//! - [`reconcile`] — key-set difference between two tables
//! - [`config`] — YAML workspace configuration
//! - [`remote`] — [`LeadSource`] / [`LeadStore`] traits and [`RemoteError`]
//! - [`error`] — [`TableError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod reconcile;
pub mod remote;
pub mod table;
pub mod types;

pub use config::{Config, Defaults, EndpointConfig, RetryConfig, WorkspaceConfig};
pub use error::{ConfigError, TableError};
pub use remote::{LeadSource, LeadStore, RemoteError};
pub use table::Table;
pub use types::{
    conversation_url, LeadPage, LeadPatch, LeadRow, PageMeta, RemoteLead, StoredLead,
    WorkspaceName,
};
