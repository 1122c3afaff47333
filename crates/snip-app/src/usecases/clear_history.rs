use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use snip_core::ports::ConfirmRequest;

use crate::context::HistoryContext;
use crate::error::EngineError;

/// Clear durable history and the system slot.
///
/// ## Behavior
/// - `execute` asks the confirmation port first and does nothing on refusal
/// - `execute_confirmed` is the destructive path itself
pub struct ClearHistory {
    ctx: Arc<HistoryContext>,
}

impl ClearHistory {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    /// Returns whether history was cleared.
    pub async fn execute(&self) -> Result<bool, EngineError> {
        let span = info_span!("usecase.clear_history.execute");

        async {
            let confirmed = self
                .ctx
                .deps()
                .confirmation
                .confirm(ConfirmRequest::ClearHistory)
                .await;
            if !confirmed {
                info!("clear history cancelled by user");
                return Ok(false);
            }
            self.execute_confirmed().await?;
            Ok(true)
        }
        .instrument(span)
        .await
    }

    pub async fn execute_confirmed(&self) -> Result<(), EngineError> {
        let mut state = self.ctx.lock().await;
        let removed = state.history.len();
        state.history.clear();
        info!(removed, "clipboard history cleared");
        self.ctx.commit(&state).await
    }
}
