use async_trait::async_trait;

use crate::ports::errors::BufferFileError;

/// The plain-text file used to bulk-edit history.
///
/// It lives at one fixed location; implementations decide where.
#[async_trait]
pub trait HistoryBufferPort: Send + Sync {
    /// Display form of the buffer location, for logs and notices.
    fn location(&self) -> String;

    async fn exists(&self) -> Result<bool, BufferFileError>;

    async fn write(&self, text: &str) -> Result<(), BufferFileError>;

    async fn read(&self) -> Result<String, BufferFileError>;

    /// Delete the file. Removing a missing file succeeds.
    async fn remove(&self) -> Result<(), BufferFileError>;
}
