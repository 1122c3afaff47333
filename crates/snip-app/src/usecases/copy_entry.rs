use std::sync::Arc;

use tracing::{debug, info};

use snip_core::ids::EntryId;

use crate::context::HistoryContext;
use crate::error::EngineError;
use crate::usecases::{CaptureInternalCopy, CaptureOutcome};

pub const COPIED_NOTICE: &str = "Copied from clipboard history";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CaptureOutcome),
    /// The clipboard rejected the write; history was left alone.
    WriteFailed,
}

/// Put a history entry back on the system clipboard and claim it.
pub struct CopyHistoryEntry {
    ctx: Arc<HistoryContext>,
}

impl CopyHistoryEntry {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(
        name = "usecase.copy_history_entry.execute",
        skip(self),
        fields(entry_id = %entry_id)
    )]
    pub async fn execute(&self, entry_id: &EntryId) -> Result<CopyOutcome, EngineError> {
        let content = {
            let state = self.ctx.lock().await;
            state
                .history
                .find(entry_id)
                .map(|entry| entry.content.clone())
                .ok_or_else(|| EngineError::EntryNotFound(entry_id.clone()))?
        };

        let deps = self.ctx.deps();
        if let Err(err) = deps.clipboard.write_text(&content).await {
            debug!(error = %err, "clipboard write failed");
            return Ok(CopyOutcome::WriteFailed);
        }

        let captured = CaptureInternalCopy::new(self.ctx.clone())
            .execute(Some(content))
            .await?;
        deps.notice.notify(COPIED_NOTICE);
        info!("entry copied to clipboard");
        Ok(CopyOutcome::Copied(captured))
    }
}
