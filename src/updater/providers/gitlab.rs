//! GitLab Releases API implementation

use serde::Deserialize;
use tracing::warn;

use crate::updater::error::UpdaterError;
use crate::updater::provider::{ProviderKind, ReleaseClient, ReleaseProvider};
use crate::updater::types::Release;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "gitlab.com";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_API_VERSION: u32 = 4;

/// Options for a GitLab project; empty strings and zero mean "use the default"
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitLabOptions {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub api_version: u32,
    #[serde(rename = "projectID", alias = "projectId")]
    pub project_id: u64,
    pub access_token: String,
}

/// Release object returned by `GET /projects/{id}/releases`
#[derive(Debug, Deserialize)]
pub struct GitLabRelease {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    released_at: Option<String>,
    #[serde(default)]
    upcoming_release: Option<bool>,
}

impl From<GitLabRelease> for Release {
    fn from(release: GitLabRelease) -> Self {
        Release {
            name: release.name.unwrap_or_default(),
            tag_name: release.tag_name.unwrap_or_default(),
            created_at: release.created_at.unwrap_or_default(),
            released_at: release.released_at.unwrap_or_default(),
            prerelease: release.upcoming_release.unwrap_or_default(),
        }
    }
}

pub struct GitLab;

impl ProviderKind for GitLab {
    const COMPONENT: &'static str = "updater:gitlab";
    const AUTH_HEADER: &'static str = "PRIVATE-TOKEN";
    type Record = GitLabRelease;

    fn authorization(access_token: &str) -> String {
        access_token.to_string()
    }
}

pub type GitLabClient = ReleaseClient<GitLab>;

impl GitLabClient {
    /// Creates a client for the given project, applying defaults for the
    /// scheme, host, port and API version.
    ///
    /// # Errors
    /// * `UpdaterError::Configuration` - If the project id is zero
    /// * `UpdaterError::Request` - If the HTTP client cannot be created
    pub fn new(
        options: GitLabOptions,
        current_version: impl Into<String>,
    ) -> Result<Self, UpdaterError> {
        if options.project_id == 0 {
            return Err(UpdaterError::Configuration(
                "project id must be specified".to_string(),
            ));
        }

        let base_path = build_base_path(&options);
        Self::build(base_path, options.access_token, current_version.into())
    }
}

fn build_base_path(options: &GitLabOptions) -> String {
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
    let api_version = if options.api_version == 0 {
        DEFAULT_API_VERSION
    } else {
        options.api_version
    };

    format!(
        "{}://{}:{}/api/v{}/projects/{}",
        scheme, host, port, api_version, options.project_id
    )
}

/// Checks for a newer release without keeping the client around.
///
/// A configuration error is logged and otherwise ignored.
pub async fn gitlab_check_latest(options: GitLabOptions, current_version: impl Into<String>) {
    match GitLabClient::new(options, current_version) {
        Ok(client) => client.check_latest().await,
        Err(e) => warn!(component = GitLab::COMPONENT, "Skipping update check: {}", e),
    }
}
