use crate::models::StatsRecord;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Serialize the record as pretty-printed JSON at `path`, creating missing
/// parent directories first. Overwrites any existing file unconditionally;
/// a write failure propagates as fatal.
pub async fn write_stats(path: impl AsRef<Path>, stats: &StatsRecord) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(stats).context("Failed to serialize stats")?;

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("💾 Saved stats to {}", path.display());

    Ok(())
}
