//! Editable text buffer round trip for the history.
//!
//! Opening writes the durable history to a plain text document, one entry
//! per segment separated by `---` lines. Closing parses the document back
//! and replaces history wholesale.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use snip_core::buffer::{decode, encode};

use crate::context::HistoryContext;
use crate::error::EngineError;

pub struct OpenHistoryBuffer {
    ctx: Arc<HistoryContext>,
}

impl OpenHistoryBuffer {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    /// Returns where the buffer document was written.
    pub async fn execute(&self) -> Result<String, EngineError> {
        let span = info_span!("usecase.open_history_buffer.execute");

        async {
            let buffer = &self.ctx.deps().buffer;
            if buffer.exists().await? {
                warn!(location = %buffer.location(), "removing orphaned history buffer");
                buffer.remove().await?;
            }

            let text = {
                let state = self.ctx.lock().await;
                encode(state.history.entries())
            };
            buffer.write(&text).await?;

            let location = buffer.location();
            info!(%location, "history buffer opened");
            Ok(location)
        }
        .instrument(span)
        .await
    }
}

pub struct CloseHistoryBuffer {
    ctx: Arc<HistoryContext>,
}

impl CloseHistoryBuffer {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    /// Re-ingest the buffer document, returning the resulting history length.
    ///
    /// A document without any segment empties the history.
    pub async fn execute(&self) -> Result<usize, EngineError> {
        let span = info_span!("usecase.close_history_buffer.execute");

        async {
            let buffer = &self.ctx.deps().buffer;
            let text = buffer.read().await?;
            let entries = decode(&text, self.ctx.now_ms());
            if entries.is_empty() {
                warn!("history buffer has no entries, history will be emptied");
            }

            let kept = {
                let mut state = self.ctx.lock().await;
                let limit = state.settings.history_limit;
                state.history.replace(entries, limit);
                let kept = state.history.len();
                self.ctx.commit(&state).await?;
                kept
            };

            buffer.remove().await?;
            info!(kept, "history buffer closed");
            Ok(kept)
        }
        .instrument(span)
        .await
    }
}
