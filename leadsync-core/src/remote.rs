//! Client seams for the two remote systems.
//!
//! [`LeadSource`] is the paginated listing endpoint; [`LeadStore`] is the
//! hosted REST database. The sync agent is written against these traits so it
//! can be exercised with in-memory fakes; `leadsync-api` provides the HTTP
//! implementations.

use thiserror::Error;

use crate::types::{LeadPage, LeadPatch, LeadRow, StoredLead, WorkspaceName};

/// Longest error body carried in a [`RemoteError`] — responses are truncated
/// so a failing bulk insert cannot flood the report.
pub const ERROR_BODY_LIMIT: usize = 200;

/// A failed remote call: non-2xx response, transport fault, or a body the
/// client could not decode.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The server answered with a non-2xx status.
    #[error("remote returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Whether a retry could plausibly succeed: transport faults, rate
    /// limiting, and server-side errors. Client errors (4xx other than 429)
    /// and decode failures are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            RemoteError::Transport(_) => true,
            RemoteError::Status { status, .. } => *status == 429 || *status >= 500,
            RemoteError::Decode(_) => false,
        }
    }
}

/// Truncate an error message to [`ERROR_BODY_LIMIT`] characters.
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() <= ERROR_BODY_LIMIT {
        return message.to_string();
    }
    let truncated: String = message.chars().take(ERROR_BODY_LIMIT).collect();
    format!("{truncated}…")
}

/// The paginated lead-listing endpoint.
pub trait LeadSource {
    /// Fetch page `page` (1-based) with `per_page` records per page.
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<LeadPage, RemoteError>;
}

/// The hosted REST store holding lead rows scoped by workspace label.
pub trait LeadStore {
    /// Delete every row scoped to `workspace`.
    fn delete_workspace(&self, workspace: &WorkspaceName) -> Result<(), RemoteError>;

    /// Bulk-insert one batch of rows.
    fn insert_rows(&self, rows: &[LeadRow]) -> Result<(), RemoteError>;

    /// List existing rows for `workspace` as `(id, email)` projections.
    fn list_workspace(&self, workspace: &WorkspaceName) -> Result<Vec<StoredLead>, RemoteError>;

    /// Point-update one row by store id.
    fn update_lead(&self, id: &str, patch: &LeadPatch) -> Result<(), RemoteError>;

    /// Count rows scoped to `workspace` (read-back verification).
    fn count_workspace(&self, workspace: &WorkspaceName) -> Result<usize, RemoteError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_server_errors_are_retryable() {
        assert!(RemoteError::Transport("reset".into()).is_retryable());
        assert!(RemoteError::Status { status: 503, body: String::new() }.is_retryable());
        assert!(RemoteError::Status { status: 429, body: String::new() }.is_retryable());
    }

    #[test]
    fn client_errors_and_decode_are_permanent() {
        assert!(!RemoteError::Status { status: 404, body: String::new() }.is_retryable());
        assert!(!RemoteError::Status { status: 401, body: String::new() }.is_retryable());
        assert!(!RemoteError::Decode("eof".into()).is_retryable());
    }

    #[test]
    fn truncate_caps_long_messages() {
        let long = "x".repeat(500);
        let truncated = truncate_message(&long);
        assert_eq!(truncated.chars().count(), ERROR_BODY_LIMIT + 1);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn truncate_leaves_short_messages_alone() {
        assert_eq!(truncate_message("short"), "short");
    }
}
