//! Provider implementations for fetching releases

pub mod gitea;
pub mod gitlab;

pub use gitea::{Gitea, GiteaClient, GiteaOptions, gitea_check_latest};
pub use gitlab::{GitLab, GitLabClient, GitLabOptions, gitlab_check_latest};
