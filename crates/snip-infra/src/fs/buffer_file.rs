use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use snip_core::ports::{BufferFileError, HistoryBufferPort};

/// Plain text history buffer at a fixed path.
pub struct FileHistoryBuffer {
    path: PathBuf,
}

impl FileHistoryBuffer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_inner(&self, text: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create buffer dir failed: {}", dir.display()))?;
        }
        fs::write(&self.path, text)
            .await
            .with_context(|| format!("write buffer failed: {}", self.path.display()))
    }
}

fn io_error(err: anyhow::Error) -> BufferFileError {
    BufferFileError::Io(format!("{err:#}"))
}

#[async_trait]
impl HistoryBufferPort for FileHistoryBuffer {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn exists(&self) -> Result<bool, BufferFileError> {
        fs::try_exists(&self.path)
            .await
            .with_context(|| format!("stat buffer failed: {}", self.path.display()))
            .map_err(io_error)
    }

    async fn write(&self, text: &str) -> Result<(), BufferFileError> {
        self.write_inner(text).await.map_err(io_error)
    }

    async fn read(&self) -> Result<String, BufferFileError> {
        match fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(BufferFileError::NotFound),
            Err(e) => Err(io_error(
                anyhow::Error::new(e).context(format!("read buffer failed: {}", self.path.display())),
            )),
        }
    }

    async fn remove(&self) -> Result<(), BufferFileError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(
                anyhow::Error::new(e)
                    .context(format!("remove buffer failed: {}", self.path.display())),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_read_remove_cycle() {
        let dir = TempDir::new().unwrap();
        let buffer = FileHistoryBuffer::new(dir.path().join("Clipboard History.md"));

        assert!(!buffer.exists().await.unwrap());
        buffer.write("alpha\n---\nbeta").await.unwrap();
        assert!(buffer.exists().await.unwrap());
        assert_eq!(buffer.read().await.unwrap(), "alpha\n---\nbeta");

        buffer.remove().await.unwrap();
        assert!(!buffer.exists().await.unwrap());
        // removing twice is fine
        buffer.remove().await.unwrap();
    }

    #[tokio::test]
    async fn reading_missing_buffer_is_not_found() {
        let dir = TempDir::new().unwrap();
        let buffer = FileHistoryBuffer::new(dir.path().join("missing.md"));

        assert!(matches!(buffer.read().await, Err(BufferFileError::NotFound)));
    }

    #[test]
    fn location_is_the_path() {
        let buffer = FileHistoryBuffer::new("/tmp/snipstack/buffer.md");
        assert_eq!(buffer.location(), "/tmp/snipstack/buffer.md");
    }
}
