//! # Application Dependencies
//!
//! Dependency grouping for engine construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use snip_core::ports::*;

/// Every port the engine talks to. All fields are required.
#[derive(Clone)]
pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,

    // Storage
    pub document_store: Arc<dyn DocumentStorePort>,
    pub buffer: Arc<dyn HistoryBufferPort>,

    // Host editing surfaces
    pub surfaces: Arc<dyn EditorSurfacePort>,

    // Presentation collaborators
    pub observer: Arc<dyn HistoryObserverPort>,
    pub notice: Arc<dyn NoticePort>,
    pub confirmation: Arc<dyn ConfirmationPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
