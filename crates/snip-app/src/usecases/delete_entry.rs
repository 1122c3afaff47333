use std::sync::Arc;

use tracing::info;

use snip_core::ids::EntryId;
use snip_core::DeleteOutcome;

use crate::context::HistoryContext;
use crate::error::EngineError;

/// Delete a single history entry.
///
/// The system-slot sentinel id clears the slot and leaves durable history
/// untouched. Unknown ids are reported, not treated as errors.
pub struct DeleteHistoryEntry {
    ctx: Arc<HistoryContext>,
}

impl DeleteHistoryEntry {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(
        name = "usecase.delete_history_entry.execute",
        skip(self),
        fields(entry_id = %entry_id)
    )]
    pub async fn execute(&self, entry_id: &EntryId) -> Result<DeleteOutcome, EngineError> {
        let mut state = self.ctx.lock().await;
        let outcome = state.history.delete(entry_id);

        match &outcome {
            DeleteOutcome::NotFound => {
                info!("entry already gone, nothing to delete");
                return Ok(outcome);
            }
            DeleteOutcome::SystemSlotCleared => info!("system slot cleared"),
            DeleteOutcome::Removed(_) => info!("history entry deleted"),
        }

        self.ctx.commit(&state).await?;
        Ok(outcome)
    }
}
