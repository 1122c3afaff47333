//! Application facade.
//!
//! [`SnipApp`] is what host collaborators (panels, switchers, the CLI)
//! hold on to. Every call delegates to a use case built on the shared
//! [`HistoryContext`].

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use snip_core::ids::{EntryId, SurfaceId};
use snip_core::view::EntryPreview;
use snip_core::{DeleteOutcome, HistoryEntry, Settings};

use crate::context::HistoryContext;
use crate::copy_signal::CopySignalDebouncer;
use crate::deps::AppDeps;
use crate::error::EngineError;
use crate::monitor::ClipboardMonitor;
use crate::usecases::*;

pub struct SnipApp {
    ctx: Arc<HistoryContext>,
    monitor: ClipboardMonitor,
    copy_signal: CopySignalDebouncer,
}

impl SnipApp {
    /// Load the persisted document and prime the engine.
    ///
    /// The monitor is not started; call [`SnipApp::start_clipboard_monitor`].
    pub async fn bootstrap(deps: AppDeps) -> Result<Self, EngineError> {
        let span = info_span!("app.bootstrap");
        async {
            let ctx = HistoryContext::load(deps).await?;
            info!("snipstack engine ready");
            Ok(Self::from_context(ctx))
        }
        .instrument(span)
        .await
    }

    pub fn from_context(ctx: Arc<HistoryContext>) -> Self {
        Self {
            monitor: ClipboardMonitor::new(ctx.clone()),
            copy_signal: CopySignalDebouncer::new(ctx.clone()),
            ctx,
        }
    }

    pub fn context(&self) -> &Arc<HistoryContext> {
        &self.ctx
    }

    // Read side

    pub async fn get_combined_history(&self) -> Vec<HistoryEntry> {
        ListCombinedHistory::new(self.ctx.clone()).execute().await
    }

    pub async fn search_history(&self, query: &str) -> Vec<HistoryEntry> {
        ListCombinedHistory::new(self.ctx.clone()).search(query).await
    }

    pub async fn previews(&self, query: &str, max_chars: usize) -> Vec<EntryPreview> {
        ListCombinedHistory::new(self.ctx.clone())
            .previews(query, max_chars)
            .await
    }

    pub async fn settings(&self) -> Settings {
        self.ctx.settings().await
    }

    // Mutations

    pub async fn delete_entry(&self, id: &EntryId) -> Result<DeleteOutcome, EngineError> {
        DeleteHistoryEntry::new(self.ctx.clone()).execute(id).await
    }

    /// Asks for confirmation first. Returns whether history was cleared.
    pub async fn clear_history(&self) -> Result<bool, EngineError> {
        ClearHistory::new(self.ctx.clone()).execute().await
    }

    pub async fn clear_history_confirmed(&self) -> Result<(), EngineError> {
        ClearHistory::new(self.ctx.clone()).execute_confirmed().await
    }

    pub async fn paste_entry(&self, id: &EntryId) -> Result<PasteOutcome, EngineError> {
        PasteHistoryEntry::new(self.ctx.clone()).execute(id).await
    }

    pub async fn copy_entry(&self, id: &EntryId) -> Result<CopyOutcome, EngineError> {
        CopyHistoryEntry::new(self.ctx.clone()).execute(id).await
    }

    pub async fn replace_history(&self, entries: Vec<HistoryEntry>) -> Result<usize, EngineError> {
        ReplaceHistory::new(self.ctx.clone()).execute(entries).await
    }

    pub async fn trim_history(&self) -> Result<usize, EngineError> {
        TrimHistory::new(self.ctx.clone()).execute().await
    }

    /// Apply new settings and bring the monitor in line with them.
    pub async fn update_settings(&self, settings: Settings) -> Result<SettingsChange, EngineError> {
        let change = UpdateSettings::new(self.ctx.clone()).execute(settings).await?;
        if change.affects_monitor() {
            self.restart_clipboard_monitor().await;
        }
        Ok(change)
    }

    pub async fn open_buffer(&self) -> Result<String, EngineError> {
        OpenHistoryBuffer::new(self.ctx.clone()).execute().await
    }

    pub async fn close_buffer(&self) -> Result<usize, EngineError> {
        CloseHistoryBuffer::new(self.ctx.clone()).execute().await
    }

    // Host inputs

    /// An internal copy happened; capture once the clipboard settles.
    pub fn copy_signal(&self) {
        self.copy_signal.signal();
    }

    /// The host wrote `text` to the clipboard itself.
    pub async fn notify_clipboard_written(&self, text: &str) -> Result<CaptureOutcome, EngineError> {
        CaptureInternalCopy::new(self.ctx.clone())
            .execute(Some(text.to_string()))
            .await
    }

    /// Run one poll immediately, outside the monitor's schedule.
    pub async fn poll_now(&self) -> Result<PollOutcome, EngineError> {
        PollSystemClipboard::new(self.ctx.clone()).execute().await
    }

    pub async fn surface_focused(&self, surface: SurfaceId) {
        self.ctx.lock().await.last_surface = Some(surface);
    }

    // Monitor lifecycle

    pub async fn start_clipboard_monitor(&self) {
        self.monitor.start().await;
    }

    pub async fn stop_clipboard_monitor(&self) {
        self.monitor.stop().await;
    }

    pub async fn restart_clipboard_monitor(&self) {
        self.monitor.restart().await;
    }

    pub async fn is_monitoring(&self) -> bool {
        self.monitor.is_running().await
    }

    /// Quiesce background work. Pending copy captures are dropped.
    pub async fn shutdown(&self) {
        self.copy_signal.cancel();
        self.monitor.stop().await;
        info!("snipstack engine stopped");
    }
}
