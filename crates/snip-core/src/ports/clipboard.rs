//! Clipboard port - abstracts the operating system's shared clipboard
//!
//! Both calls may suspend and may fail. Callers in the capture pipeline treat
//! every failure as a no-op for the current cycle.

use async_trait::async_trait;

use crate::ports::errors::ClipboardAccessError;

#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// A clipboard without text yields `Ok(String::new())`, not an error, so
    /// the poller can tell "cleared" apart from "unreadable".
    async fn read_text(&self) -> Result<String, ClipboardAccessError>;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
}
