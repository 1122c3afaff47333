use std::sync::Arc;

use tracing::info;

use snip_core::HistoryEntry;

use crate::context::HistoryContext;
use crate::error::EngineError;

/// Replace durable history wholesale (no merge), then trim to the limit.
pub struct ReplaceHistory {
    ctx: Arc<HistoryContext>,
}

impl ReplaceHistory {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(
        name = "usecase.replace_history.execute",
        skip(self, entries),
        fields(incoming = entries.len())
    )]
    pub async fn execute(&self, entries: Vec<HistoryEntry>) -> Result<usize, EngineError> {
        let mut state = self.ctx.lock().await;
        let limit = state.settings.history_limit;
        let trimmed = state.history.replace(entries, limit);
        let kept = state.history.len();
        info!(kept, trimmed, "history replaced");
        self.ctx.commit(&state).await?;
        Ok(kept)
    }
}

/// Enforce the history limit on demand.
pub struct TrimHistory {
    ctx: Arc<HistoryContext>,
}

impl TrimHistory {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    /// Returns the number of dropped entries.
    pub async fn execute(&self) -> Result<usize, EngineError> {
        let mut state = self.ctx.lock().await;
        let limit = state.settings.history_limit;
        let dropped = state.history.trim(limit);
        if dropped > 0 {
            info!(dropped, limit, "history trimmed");
            self.ctx.commit(&state).await?;
        }
        Ok(dropped)
    }
}
