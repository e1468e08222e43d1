//! Release provider trait and the generic client shared by all providers

use std::marker::PhantomData;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::updater::error::UpdaterError;
use crate::updater::fetcher::{Fetcher, HttpFetcher};
use crate::updater::semver::{is_newer, max_version};
use crate::updater::types::{Release, UpdateStatus};

/// Trait for checking a provider for newer releases
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Fetches every release on the first page of the provider's release list
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - Releases, or an empty list if the provider was unreachable
    /// * `Err(UpdaterError::Decode)` - If the response is not a release array
    async fn releases(&self) -> Result<Vec<Release>, UpdaterError>;

    /// Returns the greatest of the current version and all release tags
    async fn latest_version(&self) -> String;

    /// Compares the latest known version against the current one
    async fn is_newer_available(&self) -> UpdateStatus;

    /// Logs a warning when a newer version exists. Never fails.
    async fn check_latest(&self);
}

/// Provider-specific knowledge the generic client is parameterized over
pub trait ProviderKind: Send + Sync + 'static {
    /// Component name attached to log events
    const COMPONENT: &'static str;

    /// Name of the header carrying the access token
    const AUTH_HEADER: &'static str;

    /// Release object as it appears in the provider's JSON
    type Record: DeserializeOwned + Into<Release>;

    /// Value of the authorization header for the given token
    fn authorization(access_token: &str) -> String;
}

/// Client for one provider, immutable after construction
pub struct ReleaseClient<K: ProviderKind> {
    base_path: String,
    access_token: String,
    current_version: String,
    fetcher: Arc<dyn Fetcher>,
    kind: PhantomData<K>,
}

impl<K: ProviderKind> std::fmt::Debug for ReleaseClient<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseClient")
            .field("provider", &K::COMPONENT)
            .field("base_path", &self.base_path)
            .field("current_version", &self.current_version)
            .finish_non_exhaustive()
    }
}

impl<K: ProviderKind> ReleaseClient<K> {
    pub(crate) fn build(
        base_path: String,
        access_token: String,
        current_version: String,
    ) -> Result<Self, UpdaterError> {
        Ok(Self {
            base_path,
            access_token,
            current_version,
            fetcher: Arc::new(HttpFetcher::new()?),
            kind: PhantomData,
        })
    }

    /// Replaces the transport used for every subsequent call
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Base request path, e.g. `https://gitlab.com:443/api/v4/projects/42`
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    fn releases_url(&self) -> String {
        format!("{}/releases", self.base_path)
    }
}

#[async_trait::async_trait]
impl<K: ProviderKind> ReleaseProvider for ReleaseClient<K> {
    async fn releases(&self) -> Result<Vec<Release>, UpdaterError> {
        let url = self.releases_url();
        debug!(component = K::COMPONENT, "Fetching releases from {}", url);

        // An unreachable provider means "no known releases"; the fetcher already logged it.
        let Ok(body) = self
            .fetcher
            .fetch(&url, K::AUTH_HEADER, &K::authorization(&self.access_token))
            .await
        else {
            return Ok(Vec::new());
        };

        let records: Vec<K::Record> = serde_json::from_slice(&body).inspect_err(|e| {
            warn!(
                component = K::COMPONENT,
                "Failed to decode releases array: {}", e
            )
        })?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn latest_version(&self) -> String {
        match self.releases().await {
            Ok(releases) => max_version(
                &self.current_version,
                releases.iter().map(|r| r.tag_name.as_str()),
            ),
            Err(_) => self.current_version.clone(),
        }
    }

    async fn is_newer_available(&self) -> UpdateStatus {
        let latest_version = self.latest_version().await;
        UpdateStatus {
            newer_available: is_newer(&latest_version, &self.current_version),
            current_version: self.current_version.clone(),
            latest_version,
        }
    }

    async fn check_latest(&self) {
        let status = self.is_newer_available().await;
        if status.newer_available {
            warn!(
                component = K::COMPONENT,
                "Newer version is available {}, currently running {}",
                status.latest_version,
                status.current_version
            );
        }
    }
}
