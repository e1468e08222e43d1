//! Common types shared by the provider clients

use chrono::{DateTime, FixedOffset};

/// A single release as reported by a provider, in provider-neutral form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    /// Version identifier used for comparison
    pub tag_name: String,
    pub created_at: String,
    /// Publication time (`published_at` on Gitea, `released_at` on GitLab)
    pub released_at: String,
    /// Pre-release on Gitea, upcoming release on GitLab
    pub prerelease: bool,
}

impl Release {
    /// Parses `released_at` as an RFC 3339 timestamp.
    pub fn released_at_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.released_at).ok()
    }
}

/// Outcome of comparing the running version against the provider's releases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    pub newer_available: bool,
    pub current_version: String,
    pub latest_version: String,
}
