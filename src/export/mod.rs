use crate::{error::Result, views::SettingsExport};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

pub mod file_sink;

pub use file_sink::FileSnapshotSink;

/// Destination for exported snapshots (a download folder, a blob, ...)
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    /// Writes `contents` under `name` and returns where it ended up
    async fn write_snapshot(&self, name: &str, contents: &str) -> Result<PathBuf>;
}

/// Serializes the settings export and hands it to the sink
pub async fn export_settings(sink: &dyn SnapshotSink, export: &SettingsExport) -> Result<PathBuf> {
    let json = export.to_json()?;
    let path = sink.write_snapshot(&export.file_name(), &json).await?;
    info!(path = %path.display(), "Settings exported");
    Ok(path)
}
