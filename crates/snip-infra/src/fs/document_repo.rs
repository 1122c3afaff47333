use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use snip_core::ports::{DocumentStoreError, DocumentStorePort};
use snip_core::HistoryDocument;

/// JSON file holding settings, history and the system slot.
pub struct FileDocumentRepository {
    path: PathBuf,
}

impl FileDocumentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create document dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target.
    ///
    /// Readers see either the previous document or the complete new one.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp document failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp document to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    async fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("read document failed: {}", self.path.display()))
            }
        }
    }
}

#[async_trait]
impl DocumentStorePort for FileDocumentRepository {
    async fn load(&self) -> Result<Option<HistoryDocument>, DocumentStoreError> {
        let Some(content) = self
            .read()
            .await
            .map_err(|e| DocumentStoreError::Io(format!("{e:#}")))?
        else {
            debug!(path = %self.path.display(), "no history document yet");
            return Ok(None);
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let document: HistoryDocument = serde_json::from_str(&content)
            .with_context(|| format!("parse document failed: {}", self.path.display()))
            .map_err(|e| DocumentStoreError::Malformed(format!("{e:#}")))?;
        Ok(Some(document))
    }

    async fn save(&self, document: &HistoryDocument) -> Result<(), DocumentStoreError> {
        let content = serde_json::to_string_pretty(document)
            .context("serialize document failed")
            .map_err(|e| DocumentStoreError::Malformed(format!("{e:#}")))?;

        self.atomic_write(&content)
            .await
            .map_err(|e| DocumentStoreError::Io(format!("{e:#}")))
    }
}
