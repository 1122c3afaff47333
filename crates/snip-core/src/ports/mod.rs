//! Port interfaces for the application layer
//!
//! Ports define the contract between the reconciliation engine and the host
//! it runs in: clipboard access, persistence, editing surfaces and the
//! presentation callbacks. Infrastructure and platform crates implement them;
//! use cases only ever see the traits.

mod buffer_file;
mod clipboard;
mod clock;
mod document_store;
pub mod errors;
mod surface;
mod ui;

pub use buffer_file::HistoryBufferPort;
pub use clipboard::SystemClipboardPort;
pub use clock::ClockPort;
pub use document_store::DocumentStorePort;
pub use errors::{BufferFileError, ClipboardAccessError, DocumentStoreError, SurfaceError};
pub use surface::EditorSurfacePort;
pub use ui::{ConfirmRequest, ConfirmationPort, HistoryObserverPort, NoticePort};
