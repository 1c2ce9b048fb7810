//! Client for the hosted REST store (PostgREST-style endpoints).
//!
//! All operations work against one table, scoped by the `workspace_name`
//! column: scoped delete, bulk insert of a row array, a projection listing,
//! point updates by row id, and a read-back count.

use leadsync_core::{
    EndpointConfig, LeadPatch, LeadRow, LeadStore, RemoteError, StoredLead, WorkspaceName,
};

use crate::http;
use crate::retry::RetryPolicy;

const LEADS_TABLE: &str = "client_leads";

/// Blocking client for the lead table of the hosted store.
pub struct StoreClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl StoreClient {
    pub fn new(endpoint: &EndpointConfig, retry: RetryPolicy) -> Self {
        StoreClient {
            agent: ureq::Agent::new(),
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            api_key: endpoint.api_key.clone(),
            retry,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{LEADS_TABLE}", self.base_url)
    }

    fn request(&self, method: &str) -> ureq::Request {
        self.agent
            .request(method, &self.table_url())
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .set("Prefer", "return=minimal")
    }

    fn workspace_filter(workspace: &WorkspaceName) -> String {
        format!("eq.{}", workspace.0)
    }
}

impl LeadStore for StoreClient {
    fn delete_workspace(&self, workspace: &WorkspaceName) -> Result<(), RemoteError> {
        self.retry.call(|| {
            tracing::debug!("DELETE {} workspace={workspace}", self.table_url());
            self.request("DELETE")
                .query("workspace_name", &Self::workspace_filter(workspace))
                .call()
                .map_err(http::remote_error)?;
            Ok(())
        })
    }

    fn insert_rows(&self, rows: &[LeadRow]) -> Result<(), RemoteError> {
        self.retry.call(|| {
            tracing::debug!("POST {} ({} rows)", self.table_url(), rows.len());
            self.request("POST")
                .send_json(rows)
                .map_err(http::remote_error)?;
            Ok(())
        })
    }

    fn list_workspace(&self, workspace: &WorkspaceName) -> Result<Vec<StoredLead>, RemoteError> {
        self.retry.call(|| {
            self.request("GET")
                .query("workspace_name", &Self::workspace_filter(workspace))
                .query("select", "id,lead_email")
                .call()
                .map_err(http::remote_error)?
                .into_json()
                .map_err(http::decode_error)
        })
    }

    fn update_lead(&self, id: &str, patch: &LeadPatch) -> Result<(), RemoteError> {
        self.retry.call(|| {
            self.request("PATCH")
                .query("id", &format!("eq.{id}"))
                .send_json(patch)
                .map_err(http::remote_error)?;
            Ok(())
        })
    }

    fn count_workspace(&self, workspace: &WorkspaceName) -> Result<usize, RemoteError> {
        // The read-back mirror of the original scripts: fetch the id
        // projection and count rows client-side.
        let rows: Vec<serde_json::Value> = self.retry.call(|| {
            self.request("GET")
                .query("workspace_name", &Self::workspace_filter(workspace))
                .query("select", "id")
                .call()
                .map_err(http::remote_error)?
                .into_json()
                .map_err(http::decode_error)
        })?;
        Ok(rows.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StoreClient {
        StoreClient::new(
            &EndpointConfig {
                base_url: "https://db.example.co/".to_string(),
                api_key: "key".to_string(),
            },
            RetryPolicy::none(),
        )
    }

    #[test]
    fn table_url_is_postgrest_shaped() {
        assert_eq!(
            client().table_url(),
            "https://db.example.co/rest/v1/client_leads"
        );
    }

    #[test]
    fn workspace_filter_uses_eq_operator() {
        assert_eq!(
            StoreClient::workspace_filter(&WorkspaceName::from("David Amiri")),
            "eq.David Amiri"
        );
    }

    #[test]
    fn stored_lead_projection_parses() {
        let raw = r#"[{"id": "uuid-1", "lead_email": "a@x.co"}, {"id": "uuid-2"}]"#;
        let rows: Vec<StoredLead> = serde_json::from_str(raw).expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].lead_email, None);
    }
}
