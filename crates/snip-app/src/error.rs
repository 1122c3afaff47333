use snip_core::ids::EntryId;
use snip_core::ports::{BufferFileError, DocumentStoreError};
use snip_core::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The document write failed. In-memory state was already updated and
    /// stays authoritative until the next successful write.
    #[error("failed to persist history: {0}")]
    Persistence(#[from] DocumentStoreError),

    #[error("history buffer error: {0}")]
    Buffer(#[from] BufferFileError),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    #[error("history entry not found: {0}")]
    EntryNotFound(EntryId),
}
