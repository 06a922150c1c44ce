// src/client.rs
use crate::error::FetchError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Parameters for one records query. `where_clause` uses the store's filter
/// syntax, e.g. `(slug,eq,acme)`.
#[derive(Debug, Clone)]
pub struct RecordQuery<'a> {
    pub view_id: &'a str,
    pub where_clause: Option<String>,
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    list: Vec<Value>,
}

/// Read-only client for the record store's `/tables/{id}/records` endpoint.
/// Cheap to clone; configuration is fixed after construction.
#[derive(Debug, Clone)]
pub struct RecordClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    log_headers: bool,
}

impl RecordClient {
    pub fn new(base_url: &str, api_token: &str, log_headers: bool) -> Result<Self, FetchError> {
        // Catch malformed configuration here rather than on the first query.
        Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            log_headers,
        })
    }

    /// Fetch one page of raw records. No retry, no backoff; transport
    /// defaults apply. Non-2xx statuses surface as `FetchError::Request`.
    pub async fn fetch_records(
        &self,
        table_id: &str,
        query: &RecordQuery<'_>,
    ) -> Result<Vec<Value>, FetchError> {
        let url = format!("{}/tables/{}/records", self.base_url, table_id);

        let mut params: Vec<(&str, String)> = vec![
            ("viewId", query.view_id.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(filter) = &query.where_clause {
            params.push(("where", filter.clone()));
        }

        if self.log_headers {
            debug!(
                "GET {} {:?} headers: xc-token=<{} bytes> Accept=application/json",
                url,
                params,
                self.api_token.len()
            );
        }

        let response = self
            .http
            .get(&url)
            .header("xc-token", &self.api_token)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let page: RecordPage = response.json().await?;
        Ok(page.list)
    }
}
