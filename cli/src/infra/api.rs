//! Infrastructure implementation of the `MamApi` port over HTTP.

use std::time::Duration;

use anyhow::Result;
use mam_common::ApiConfig;
use mam_common::api::{ChangeSetDocument, ItemDocument, ItemListPage, JobDocument};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::application::ports::MamApi;
use crate::domain::{ApiError, KeepFiles};

/// Timeout applied to every REST request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// `reqwest` client speaking JSON to `<url>/API` with basic auth.
pub struct HttpMamApi {
    client: Client,
    base: String,
    username: String,
    password: String,
}

impl HttpMamApi {
    /// Build a client from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or a credential is missing, or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let missing = config.missing_keys();
        if !missing.is_empty() {
            return Err(ApiError::NotConfigured(missing.join(", ")).into());
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base: config.api_base(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(method, url, "request");
        request
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                method,
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    async fn send_ok(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = self.send(method, url, request).await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

impl MamApi for HttpMamApi {
    fn endpoint(&self, path: &str) -> String {
        self.url(path)
    }

    async fn list_items(&self, first: u64, number: u64) -> Result<ItemListPage> {
        let url = self.url(&format!("item;number={number};first={first}"));
        let response = self.send_ok("GET", &url, self.client.get(&url)).await?;
        Ok(decode(&url, response).await?)
    }

    async fn item_field(&self, item_id: &str, field: &str) -> Result<ItemDocument> {
        let url = self.url(&format!("item/{item_id}"));
        let request = self
            .client
            .get(&url)
            .query(&[("content", "metadata"), ("field", field)]);
        let response = self.send_ok("GET", &url, request).await?;
        Ok(decode(&url, response).await?)
    }

    async fn start_thumbnail_job(&self, item_id: &str) -> Result<JobDocument> {
        let url = self.url(&format!("item/{item_id}/thumbnail"));
        let response = self.send_ok("POST", &url, self.client.post(&url)).await?;
        Ok(decode(&url, response).await?)
    }

    async fn metadata_changes(&self, item_id: &str) -> Result<Option<ChangeSetDocument>> {
        let url = self.url(&format!("item/{item_id}/metadata/changes"));
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        if response.status() != StatusCode::OK {
            tracing::warn!(url = %url, status = response.status().as_u16(), "change list unavailable");
            return Ok(None);
        }
        Ok(Some(decode(&url, response).await?))
    }

    async fn delete_metadata_change(&self, item_id: &str, change_id: &str) -> Result<()> {
        let url = self.url(&format!("item/{item_id}/metadata/changes/{change_id}"));
        self.send_ok("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }

    async fn delete_item(&self, item_id: &str, keep: &KeepFiles) -> Result<()> {
        let url = self.url(&format!("item/{item_id}"));
        let request = self.client.delete(&url).query(&keep.query());
        self.send_ok("DELETE", &url, request).await?;
        Ok(())
    }
}
