//! Use case for one tick of the external clipboard poller

use std::sync::Arc;

use tracing::{debug, info, trace};

use snip_core::CaptureFilter;

use crate::context::HistoryContext;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Tracking is switched off in settings.
    Disabled,
    Unreadable,
    /// The clipboard was emptied; `purged` durable entries held the old value.
    Cleared { purged: usize },
    Filtered,
    Unchanged,
    /// The clipboard holds the newest durable entry: an internal copy echo.
    Echo { slot_cleared: bool },
    SlotUpdated,
}

/// Classify the current external clipboard content.
///
/// ## Behavior
/// 1. empty now, cursor non-empty: purge durable entries equal to the
///    cursor, clear the slot, reset the cursor
/// 2. filtered content: ignored, cursor unchanged
/// 3. empty or equal to the cursor: ignored
/// 4. equal to the newest durable entry: advance cursor, drop the slot
/// 5. anything else: advance cursor and replace the system slot
pub struct PollSystemClipboard {
    ctx: Arc<HistoryContext>,
}

impl PollSystemClipboard {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    #[tracing::instrument(name = "usecase.poll_system_clipboard.execute", skip(self))]
    pub async fn execute(&self) -> Result<PollOutcome, EngineError> {
        if !self.ctx.settings().await.track_system_clipboard {
            return Ok(PollOutcome::Disabled);
        }

        let current = match self.ctx.deps().clipboard.read_text().await {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "clipboard read failed, skipping tick");
                return Ok(PollOutcome::Unreadable);
            }
        };

        let mut state = self.ctx.lock().await;

        if current.is_empty() && !state.cursor.is_empty() {
            let cleared = std::mem::take(&mut state.cursor);
            let purged = state.history.purge_content(&cleared);
            state.history.clear_system_slot();
            info!(purged, "system clipboard cleared");
            self.ctx.commit(&state).await?;
            return Ok(PollOutcome::Cleared { purged });
        }

        if current.is_empty() || current == state.cursor {
            return Ok(PollOutcome::Unchanged);
        }

        if !CaptureFilter::from_settings(&state.settings).accepts(&current) {
            trace!("external clipboard content filtered");
            return Ok(PollOutcome::Filtered);
        }

        if state.history.is_newest(&current) {
            state.cursor = current;
            let slot_cleared = state.history.clear_system_slot().is_some();
            if slot_cleared {
                self.ctx.commit(&state).await?;
            }
            debug!(slot_cleared, "external clipboard echoes newest entry");
            return Ok(PollOutcome::Echo { slot_cleared });
        }

        let now = self.ctx.now_ms();
        state.history.set_system_slot(&current, now);
        state.cursor = current;
        debug!("system slot updated");
        self.ctx.commit(&state).await?;
        Ok(PollOutcome::SlotUpdated)
    }
}
