//! Notion client: the single point of entry for content-backend calls.
//!
//! Resumes and users both live in Notion databases; every read goes through
//! `query_database`, which follows the cursor until the collection is complete.
//! An optional filter narrows the query on the backend side.
//! Failed calls are surfaced to the caller once, without retries.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::models::record::RawRecord;

pub const NOTION_VERSION: &str = "2022-06-28";
/// Maximum page size accepted by the database query endpoint.
const QUERY_PAGE_SIZE: u32 = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a Value>,
}

/// Database filter matching records whose `email` property equals `email` exactly.
pub fn email_equals_filter(email: &str) -> Value {
    json!({
        "property": "email",
        "email": { "equals": email }
    })
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<RawRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NotionApiError {
    message: String,
}

#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, NotionError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            base_url,
        })
    }

    /// Fetches every record in a database matching `filter` (all records when
    /// `None`), in backend order.
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: Option<&Value>,
    ) -> Result<Vec<RawRecord>, NotionError> {
        let url = format!("{}/databases/{}/query", self.base_url, database_id);
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.query_page(&url, cursor.as_deref(), filter).await?;
            records.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        debug!("Fetched {} records from database {database_id}", records.len());
        Ok(records)
    }

    async fn query_page(
        &self,
        url: &str,
        start_cursor: Option<&str>,
        filter: Option<&Value>,
    ) -> Result<QueryResponse, NotionError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&QueryRequest {
                page_size: QUERY_PAGE_SIZE,
                start_cursor,
                filter,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<NotionApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(NotionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
