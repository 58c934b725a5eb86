use crate::{error::Result, export::SnapshotSink};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes snapshots as files into a directory
pub struct FileSnapshotSink {
    dir: PathBuf,
}

impl FileSnapshotSink {
    /// Creates a sink rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SnapshotSink for FileSnapshotSink {
    async fn write_snapshot(&self, name: &str, contents: &str) -> Result<PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }

        let path = self.dir.join(name);
        fs::write(&path, contents).await?;
        Ok(path)
    }
}
