//! Domain types for lead synchronization.
//!
//! Remote records come from the lead-listing service ("Bison"); store rows go
//! to the hosted REST database. Cross-system identity is the lowercased email
//! address — the email is neither guaranteed unique nor present, so every
//! consumer must tolerate `None`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed workspace label scoping store records (e.g. a client name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceName(pub String);

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WorkspaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Remote listing records
// ---------------------------------------------------------------------------

/// A single lead as returned by the listing endpoint.
///
/// Auxiliary attributes (`tags`, `custom_variables`, `lead_campaign_data`,
/// `overall_stats`) are carried as opaque JSON — they are passed through to
/// the store untouched, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RemoteLead {
    pub id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub custom_variables: Value,
    #[serde(default)]
    pub tags: Value,
    #[serde(default)]
    pub lead_campaign_data: Value,
    #[serde(default)]
    pub overall_stats: Value,
}

impl RemoteLead {
    /// Normalized identity key: trimmed, lowercased email. `None` when the
    /// record has no usable email.
    pub fn email_key(&self) -> Option<String> {
        let email = self.email.as_deref()?.trim();
        if email.is_empty() {
            return None;
        }
        Some(email.to_lowercase())
    }
}

/// Pagination metadata reported alongside each listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default = "default_last_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        PageMeta {
            current_page: 0,
            last_page: default_last_page(),
            total: 0,
        }
    }
}

fn default_last_page() -> u32 {
    1
}

/// One page of remote leads plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadPage {
    pub leads: Vec<RemoteLead>,
    pub meta: PageMeta,
}

// ---------------------------------------------------------------------------
// Store records
// ---------------------------------------------------------------------------

/// A full row for the store's lead table — the fixed insert schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRow {
    pub bison_reply_id: String,
    pub bison_lead_id: String,
    pub workspace_name: String,
    pub lead_email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub custom_variables: Value,
    pub tags: Value,
    pub lead_status: Option<String>,
    pub lead_campaign_data: Value,
    pub overall_stats: Value,
    pub lead_value: u32,
    pub bison_conversation_url: String,
    pub pipeline_stage: String,
    pub pipeline_position: u32,
}

impl LeadRow {
    /// Transform a remote lead into a store row scoped to `workspace`.
    ///
    /// `app_base_url` is the listing service's API base; the conversation URL
    /// is derived from it via [`conversation_url`].
    pub fn from_remote(
        lead: RemoteLead,
        workspace: &WorkspaceName,
        app_base_url: &str,
        lead_value: u32,
    ) -> Self {
        LeadRow {
            bison_reply_id: format!("lead_{}", lead.id),
            bison_lead_id: lead.id.to_string(),
            workspace_name: workspace.0.clone(),
            lead_email: lead.email,
            first_name: lead.first_name,
            last_name: lead.last_name,
            phone: lead.phone,
            address: lead.address,
            city: lead.city,
            state: lead.state,
            zip: lead.zip,
            title: lead.title,
            company: lead.company,
            custom_variables: lead.custom_variables,
            tags: lead.tags,
            lead_status: lead.status,
            lead_campaign_data: lead.lead_campaign_data,
            overall_stats: lead.overall_stats,
            lead_value,
            bison_conversation_url: conversation_url(app_base_url, lead.id),
            pipeline_stage: "new".to_string(),
            pipeline_position: 0,
        }
    }
}

/// A store-side lead projection used by patch mode: row id plus email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLead {
    pub id: String,
    #[serde(default)]
    pub lead_email: Option<String>,
}

impl StoredLead {
    /// Normalized identity key, same rules as [`RemoteLead::email_key`].
    pub fn email_key(&self) -> Option<String> {
        let email = self.lead_email.as_deref()?.trim();
        if email.is_empty() {
            return None;
        }
        Some(email.to_lowercase())
    }
}

/// The two fields patch mode writes back to an existing store row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPatch {
    pub bison_conversation_url: String,
    pub bison_lead_id: String,
}

// ---------------------------------------------------------------------------
// Derived URL
// ---------------------------------------------------------------------------

/// Web URL for a lead's conversation view, derived from the API base URL.
///
/// The listing API lives under `<host>/api`; the conversation pages live at
/// `<host>/leads/<id>`, so a trailing `/api` segment is stripped.
pub fn conversation_url(api_base_url: &str, lead_id: u64) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    let host = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    format!("{host}/leads/{lead_id}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
