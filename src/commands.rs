//! Command implementations for the `release-check` binary

use std::io::Write;

use crate::updater::error::UpdaterError;
use crate::updater::provider::ReleaseProvider;

/// Reports whether a newer release is available.
///
/// Returns true when an update exists. Provider failures are absorbed into
/// "no update".
pub async fn check(provider: &dyn ReleaseProvider, out: &mut dyn Write) -> anyhow::Result<bool> {
    let status = provider.is_newer_available().await;

    if status.newer_available {
        writeln!(
            out,
            "Update available: {} -> {}",
            status.current_version, status.latest_version
        )?;
    } else {
        writeln!(out, "{} is up to date", status.current_version)?;
    }

    Ok(status.newer_available)
}

/// Prints every release the provider reports, one per line.
pub async fn list_releases(
    provider: &dyn ReleaseProvider,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let releases = provider.releases().await.map_err(|e| match e {
        UpdaterError::Decode(_) => anyhow::anyhow!("provider returned an unexpected response: {}", e),
        other => other.into(),
    })?;

    for release in releases {
        let released = release
            .released_at_time()
            .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let marker = if release.prerelease { " (pre-release)" } else { "" };

        writeln!(
            out,
            "{}\t{}\t{}{}",
            release.tag_name, released, release.name, marker
        )?;
    }

    Ok(())
}
