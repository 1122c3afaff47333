//! Use case for capturing an editor-side copy into durable history

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use snip_core::{AppendOutcome, CaptureFilter, FilterRejection, HistoryEntry};

use crate::context::HistoryContext;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A durable entry was created (or an older duplicate promoted).
    Captured(HistoryEntry),
    /// Duplicates are allowed and the content already is the newest entry.
    AlreadyNewest,
    Filtered(FilterRejection),
    /// The clipboard could not be read; nothing happened.
    Unreadable,
}

/// Capture an internal copy.
///
/// ## Behavior
/// - Uses the forced text when the host already knows what it wrote,
///   otherwise reads the system clipboard (failures are swallowed)
/// - Applies the capture filter, then advances the shared cursor
/// - Appends a durable entry under the dedup policy
/// - Clears the system slot when it held the same content (claimed)
pub struct CaptureInternalCopy {
    ctx: Arc<HistoryContext>,
}

impl CaptureInternalCopy {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, forced_text: Option<String>) -> Result<CaptureOutcome, EngineError> {
        let span = info_span!(
            "usecase.capture_internal_copy.execute",
            forced = forced_text.is_some()
        );

        async {
            let content = match forced_text {
                Some(text) => text,
                None => match self.ctx.deps().clipboard.read_text().await {
                    Ok(text) => text,
                    Err(err) => {
                        debug!(error = %err, "clipboard read failed, skipping capture");
                        return Ok(CaptureOutcome::Unreadable);
                    }
                },
            };

            let mut state = self.ctx.lock().await;
            let settings = state.settings.clone();

            if let Err(rejection) = CaptureFilter::from_settings(&settings).check(&content) {
                debug!(reason = %rejection, "internal copy filtered");
                return Ok(CaptureOutcome::Filtered(rejection));
            }

            state.cursor = content.clone();

            let now = self.ctx.now_ms();
            match state.history.append(&content, now, &settings) {
                AppendOutcome::Inserted {
                    entry,
                    promoted,
                    trimmed,
                } => {
                    let claimed = state.history.clear_system_slot_matching(&content);
                    info!(
                        entry_id = %entry.id,
                        promoted,
                        trimmed,
                        claimed,
                        "captured internal copy"
                    );
                    self.ctx.commit(&state).await?;
                    Ok(CaptureOutcome::Captured(entry))
                }
                AppendOutcome::AlreadyNewest => {
                    debug!("internal copy repeats newest entry");
                    Ok(CaptureOutcome::AlreadyNewest)
                }
                AppendOutcome::Rejected(rejection) => Ok(CaptureOutcome::Filtered(rejection)),
            }
        }
        .instrument(span)
        .await
    }
}
