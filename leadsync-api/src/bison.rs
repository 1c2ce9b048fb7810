//! Client for the lead-listing service ("Bison").
//!
//! One endpoint matters here: `GET <base>/leads`, paginated, filtered by
//! workspace id and optionally by a tag id. Responses carry a `data` array
//! plus `meta` pagination info.

use serde::Deserialize;

use leadsync_core::{EndpointConfig, LeadPage, LeadSource, PageMeta, RemoteError, RemoteLead};

use crate::http;
use crate::retry::RetryPolicy;

/// Wire shape of the listing response.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    data: Vec<RemoteLead>,
    #[serde(default)]
    meta: PageMeta,
}

/// Blocking client for the paginated `/leads` listing.
pub struct BisonClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    workspace_id: u64,
    tag_id: Option<u64>,
    retry: RetryPolicy,
}

impl BisonClient {
    pub fn new(
        endpoint: &EndpointConfig,
        workspace_id: u64,
        tag_id: Option<u64>,
        retry: RetryPolicy,
    ) -> Self {
        BisonClient {
            agent: ureq::Agent::new(),
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            api_key: endpoint.api_key.clone(),
            workspace_id,
            tag_id,
            retry,
        }
    }

    /// The API base this client talks to (used to derive conversation URLs).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn leads_url(&self) -> String {
        format!("{}/leads", self.base_url)
    }
}

impl LeadSource for BisonClient {
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<LeadPage, RemoteError> {
        let url = self.leads_url();
        let response: ListResponse = self.retry.call(|| {
            let mut request = self
                .agent
                .get(&url)
                .set("Authorization", &format!("Bearer {}", self.api_key))
                .set("Accept", "application/json")
                .query("workspace_id", &self.workspace_id.to_string())
                .query("page", &page.to_string())
                .query("per_page", &per_page.to_string());
            if let Some(tag_id) = self.tag_id {
                request = request.query("filters[tag_ids][]", &tag_id.to_string());
            }
            tracing::debug!("GET {url} page={page} per_page={per_page}");
            request
                .call()
                .map_err(http::remote_error)?
                .into_json()
                .map_err(http::decode_error)
        })?;

        Ok(LeadPage {
            leads: response.data,
            meta: response.meta,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
