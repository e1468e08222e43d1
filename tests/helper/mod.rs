mod server;

pub use server::{gitea_options, gitlab_options, releases_body};
