//! Infrastructure implementation of the `SearchIndex` port.

use anyhow::Result;
use mam_common::api::search::{SearchPage, all_items_query};
use reqwest::Client;

use crate::application::ports::SearchIndex;
use crate::domain::ApiError;
use crate::infra::api::REQUEST_TIMEOUT;

/// Search endpoint queried with `POST <url>` and a JSON body.
pub struct HttpSearchIndex {
    client: Client,
    url: String,
}

impl HttpSearchIndex {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

/// Request body for one page of non-deleted items.
#[must_use]
pub fn search_body(from: u64, size: u64) -> serde_json::Value {
    serde_json::json!({
        "from": from,
        "size": size,
        "query": all_items_query(),
    })
}

impl SearchIndex for HttpSearchIndex {
    async fn search_items(&self, from: u64, size: u64) -> Result<SearchPage> {
        let url = &self.url;
        let response = self
            .client
            .post(url)
            .json(&search_body(from, size))
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                method: "POST",
                url: url.clone(),
                message: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                method: "POST",
                url: url.clone(),
                status: response.status().as_u16(),
            }
            .into());
        }
        let page = response
            .json::<SearchPage>()
            .await
            .map_err(|e| ApiError::Decode {
                url: url.clone(),
                message: e.to_string(),
            })?;
        Ok(page)
    }
}
