//! # Dependency wiring
//!
//! The only place that knows every concrete adapter. It assembles
//! [`AppDeps`] and makes no decisions of its own.

use std::sync::Arc;

use snip_app::AppDeps;
use snip_core::ports::SystemClipboardPort;
use snip_infra::{FileDocumentRepository, FileHistoryBuffer, SystemClock};
use snip_platform::OsClipboard;

use crate::adapters::{LoggingObserver, PromptConfirmation, StdoutSurface, TerminalNotice};
use crate::bootstrap::config::HostPaths;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Host choices that change which adapter gets wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct WiringOptions {
    /// Answer every confirmation with yes.
    pub assume_yes: bool,
}

pub fn wire_dependencies(paths: &HostPaths, options: WiringOptions) -> WiringResult<AppDeps> {
    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(
        OsClipboard::new().map_err(|e| WiringError::ClipboardInit(format!("{e:#}")))?,
    );
    Ok(wire_with_clipboard(paths, options, clipboard))
}

/// Assemble dependencies around an already constructed clipboard.
pub fn wire_with_clipboard(
    paths: &HostPaths,
    options: WiringOptions,
    clipboard: Arc<dyn SystemClipboardPort>,
) -> AppDeps {
    AppDeps {
        clipboard,
        document_store: Arc::new(FileDocumentRepository::new(&paths.document)),
        buffer: Arc::new(FileHistoryBuffer::new(&paths.buffer)),
        surfaces: Arc::new(StdoutSurface),
        observer: Arc::new(LoggingObserver),
        notice: Arc::new(TerminalNotice),
        confirmation: Arc::new(PromptConfirmation::new(options.assume_yes)),
        clock: Arc::new(SystemClock),
    }
}
