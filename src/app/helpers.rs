//! Async helper functions for background work

use anyhow::Context;

use crate::features::Settings;

/// Persist settings off the UI thread
pub async fn save_settings(settings: Settings) -> anyhow::Result<()> {
    tokio::task::spawn_blocking(move || settings.save())
        .await
        .context("settings save task panicked")?
        .context("failed to save settings")
}
