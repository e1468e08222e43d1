//! Authenticated HTTP GET for provider APIs

#[cfg(test)]
use mockall::automock;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::warn;

use crate::updater::error::UpdaterError;

const USER_AGENT: &str = "release-check";

/// Trait for fetching a raw response body from a provider endpoint
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues a GET request to `url` with one authorization header
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The response body, whatever the status code
    /// * `Err(UpdaterError::Request)` - If the request could not be built, sent or read
    async fn fetch(
        &self,
        url: &str,
        header_name: &str,
        header_value: &str,
    ) -> Result<Vec<u8>, UpdaterError>;
}

/// Fetcher backed by a reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, UpdaterError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        header_name: &str,
        header_value: &str,
    ) -> Result<Vec<u8>, UpdaterError> {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(header_name, header_value)
            .build()
            .inspect_err(|e| {
                warn!(
                    component = "updater:create-request",
                    "Failed to create new request: {}", e
                )
            })?;

        let response = self.client.execute(request).await.inspect_err(|e| {
            warn!(
                component = "updater:send-request",
                "Failed to fetch data from {}: {}", url, e
            )
        })?;

        let body = response.bytes().await.inspect_err(|e| {
            warn!(
                component = "updater:process-request",
                "Failed to read response body from {}: {}", url, e
            )
        })?;

        Ok(body.to_vec())
    }
}
