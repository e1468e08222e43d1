//! Self-hosted Gitea releases API

use serde::Deserialize;
use tracing::warn;

use crate::updater::error::UpdaterError;
use crate::updater::provider::{ProviderKind, ReleaseClient, ReleaseProvider};
use crate::updater::types::Release;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "gitea.local";
pub const DEFAULT_PORT: u16 = 80;
const API_PATH: &str = "api/v1";

/// Options for a Gitea repository; empty strings and zero mean "use the default"
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GiteaOptions {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub owner: String,
    pub repository: String,
    pub access_token: String,
}

/// Release object returned by `GET /repos/{owner}/{repo}/releases`
///
/// Gitea sends `null` for unset fields, hence the options.
#[derive(Debug, Deserialize)]
pub struct GiteaRelease {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    prerelease: Option<bool>,
}

impl From<GiteaRelease> for Release {
    fn from(release: GiteaRelease) -> Self {
        Release {
            name: release.name.unwrap_or_default(),
            tag_name: release.tag_name.unwrap_or_default(),
            created_at: release.created_at.unwrap_or_default(),
            released_at: release.published_at.unwrap_or_default(),
            prerelease: release.prerelease.unwrap_or_default(),
        }
    }
}

pub struct Gitea;

impl ProviderKind for Gitea {
    const COMPONENT: &'static str = "updater:gitea";
    const AUTH_HEADER: &'static str = "Authorization";
    type Record = GiteaRelease;

    fn authorization(access_token: &str) -> String {
        format!("token {}", access_token)
    }
}

pub type GiteaClient = ReleaseClient<Gitea>;

impl GiteaClient {
    /// Creates a client for `owner/repository`, applying defaults for the
    /// scheme, host and port.
    ///
    /// # Errors
    /// * `UpdaterError::Configuration` - If the owner or repository name is empty
    /// * `UpdaterError::Request` - If the HTTP client cannot be created
    pub fn new(
        options: GiteaOptions,
        current_version: impl Into<String>,
    ) -> Result<Self, UpdaterError> {
        if options.owner.is_empty() {
            return Err(UpdaterError::Configuration(
                "repository owner name must be specified".to_string(),
            ));
        }
        if options.repository.is_empty() {
            return Err(UpdaterError::Configuration(
                "repository name must be specified".to_string(),
            ));
        }

        let base_path = build_base_path(&options);
        Self::build(base_path, options.access_token, current_version.into())
    }
}

fn build_base_path(options: &GiteaOptions) -> String {
    let scheme = if options.scheme.is_empty() {
        DEFAULT_SCHEME
    } else {
        &options.scheme
    };
    let host = if options.host.is_empty() {
        DEFAULT_HOST
    } else {
        &options.host
    };
    let port = if options.port == 0 {
        DEFAULT_PORT
    } else {
        options.port
    };

    format!(
        "{}://{}:{}/{}/repos/{}/{}",
        scheme, host, port, API_PATH, options.owner, options.repository
    )
}

/// Checks for a newer release without keeping the client around.
///
/// A configuration error is logged and otherwise ignored.
pub async fn gitea_check_latest(options: GiteaOptions, current_version: impl Into<String>) {
    match GiteaClient::new(options, current_version) {
        Ok(client) => client.check_latest().await,
        Err(e) => warn!(component = Gitea::COMPONENT, "Skipping update check: {}", e),
    }
}
