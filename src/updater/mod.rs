//! Release checking against source-control hosting providers
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Providers  │────▶│   Fetcher   │     │   Semver    │
//! │(gitea,gitlab│     │ (HTTP GET)  │     │ (compare)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       ▲
//!        ▼                                       │
//! ┌─────────────┐                                │
//! │  Provider   │────────────────────────────────┘
//! │ (releases,  │
//! │  latest)    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`provider`]: `ReleaseProvider` trait and the generic client
//! - [`providers`]: Gitea and GitLab specifics (URLs, headers, JSON shape)
//! - [`fetcher`]: Authenticated HTTP GET
//! - [`semver`]: Lenient version parsing and comparison
//! - [`types`]: `Release` and `UpdateStatus`
//! - [`error`]: Error type shared by all of the above

pub mod error;
pub mod fetcher;
pub mod provider;
pub mod providers;
pub mod semver;
pub mod types;
