//! Mock provider server utilities

use mockito::ServerGuard;
use serde_json::{Value, json};

use release_check::updater::providers::{GitLabOptions, GiteaOptions};

/// Gitea options pointing at the mock server
pub fn gitea_options(server: &ServerGuard, owner: &str, repository: &str) -> GiteaOptions {
    let address = server.socket_address();
    GiteaOptions {
        scheme: "http".to_string(),
        host: address.ip().to_string(),
        port: address.port(),
        owner: owner.to_string(),
        repository: repository.to_string(),
        access_token: "gitea-token".to_string(),
    }
}

/// GitLab options pointing at the mock server
pub fn gitlab_options(server: &ServerGuard, project_id: u64) -> GitLabOptions {
    let address = server.socket_address();
    GitLabOptions {
        scheme: "http".to_string(),
        host: address.ip().to_string(),
        port: address.port(),
        api_version: 4,
        project_id,
        access_token: "glpat-token".to_string(),
    }
}

/// JSON release array with one object per `(tag, extra fields)`
pub fn releases_body(releases: &[(&str, Value)]) -> String {
    let items: Vec<Value> = releases
        .iter()
        .map(|(tag, extra)| {
            let mut item = json!({ "name": format!("Release {}", tag), "tag_name": tag });
            if let (Some(item), Some(extra)) = (item.as_object_mut(), extra.as_object()) {
                item.extend(extra.clone());
            }
            item
        })
        .collect();
    Value::Array(items).to_string()
}
