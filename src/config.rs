use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::updater::error::UpdaterError;
use crate::updater::provider::ReleaseProvider;
use crate::updater::providers::{GitLabClient, GitLabOptions, GiteaClient, GiteaOptions};

/// File name of the configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Provider selection as read from the configuration file
///
/// ```json
/// { "provider": "gitlab", "projectID": 42, "accessToken": "glpat-..." }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderConfig {
    Gitea(GiteaOptions),
    Gitlab(GitLabOptions),
}

impl ProviderConfig {
    /// Builds the matching client, validating the required fields
    pub fn into_provider(
        self,
        current_version: impl Into<String>,
    ) -> Result<Box<dyn ReleaseProvider>, UpdaterError> {
        Ok(match self {
            ProviderConfig::Gitea(options) => Box::new(GiteaClient::new(options, current_version)?),
            ProviderConfig::Gitlab(options) => {
                Box::new(GitLabClient::new(options, current_version)?)
            }
        })
    }
}

/// Reads a provider configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ProviderConfig, UpdaterError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        UpdaterError::Configuration(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        UpdaterError::Configuration(format!("invalid config {}: {}", path.display(), e))
    })
}

/// Constructs a client from `config` and checks for a newer release.
///
/// A configuration error is logged and otherwise ignored.
pub async fn provider_check_latest(config: ProviderConfig, current_version: impl Into<String>) {
    match config.into_provider(current_version) {
        Ok(provider) => provider.check_latest().await,
        Err(e) => warn!(component = "updater", "Skipping update check: {}", e),
    }
}

/// Returns the path to the configuration directory for release-check.
/// Uses $XDG_CONFIG_HOME/release-check if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/release-check,
/// or ./release-check if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("release-check")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn provider_config_parses_gitea_with_defaults_for_missing_fields() {
        let result = serde_json::from_value::<ProviderConfig>(json!({
            "provider": "gitea",
            "owner": "leads",
            "repository": "ccm"
        }))
        .unwrap();

        assert_eq!(
            result,
            ProviderConfig::Gitea(GiteaOptions {
                owner: "leads".to_string(),
                repository: "ccm".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn provider_config_parses_full_gitlab_object() {
        let result = serde_json::from_value::<ProviderConfig>(json!({
            "provider": "gitlab",
            "scheme": "http",
            "host": "git.internal",
            "port": 8080,
            "apiVersion": 4,
            "projectID": 42,
            "accessToken": "glpat-secret"
        }))
        .unwrap();

        assert_eq!(
            result,
            ProviderConfig::Gitlab(GitLabOptions {
                scheme: "http".to_string(),
                host: "git.internal".to_string(),
                port: 8080,
                api_version: 4,
                project_id: 42,
                access_token: "glpat-secret".to_string(),
            })
        );
    }

    #[test]
    fn provider_config_rejects_unknown_provider() {
        let result = serde_json::from_value::<ProviderConfig>(json!({
            "provider": "bitbucket"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn into_provider_validates_required_fields() {
        let config = ProviderConfig::Gitlab(GitLabOptions::default());

        let result = config.into_provider("1.0.0");

        assert!(matches!(result, Err(UpdaterError::Configuration(_))));
    }

    #[test]
    fn load_config_reads_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"provider": "gitlab", "projectID": 7}"#).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(
            config,
            ProviderConfig::Gitlab(GitLabOptions {
                project_id: 7,
                ..Default::default()
            })
        );
    }

    #[test]
    fn load_config_returns_configuration_error_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_config(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(UpdaterError::Configuration(_))));
    }

    #[test]
    fn load_config_returns_configuration_error_for_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "provider = gitea").unwrap();

        let result = load_config(&path);

        assert!(matches!(result, Err(UpdaterError::Configuration(_))));
    }

    #[tokio::test]
    async fn provider_check_latest_ignores_configuration_error() {
        provider_check_latest(ProviderConfig::Gitea(GiteaOptions::default()), "1.0.0").await;
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/release-check"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.config/release-check"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./release-check"));
    }
}
