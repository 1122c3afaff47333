use async_trait::async_trait;

use crate::document::HistoryDocument;
use crate::ports::errors::DocumentStoreError;

/// Key-value style storage for the whole history document.
///
/// The document is always read and written wholesale.
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// `Ok(None)` when nothing was persisted yet.
    async fn load(&self) -> Result<Option<HistoryDocument>, DocumentStoreError>;

    async fn save(&self, document: &HistoryDocument) -> Result<(), DocumentStoreError>;
}
