//! Use case for pasting a history entry into an editing surface

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use snip_core::ids::{EntryId, SurfaceId};
use snip_core::EntrySource;

use crate::context::HistoryContext;
use crate::error::EngineError;
use crate::usecases::{CaptureInternalCopy, DeleteHistoryEntry};

pub const NO_PASTE_TARGET_NOTICE: &str = "No active note to paste into";
pub const PASTE_FAILED_NOTICE: &str = "Failed to paste into note";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    Pasted {
        surface: SurfaceId,
        /// The pasted entry was removed afterwards (auto delete).
        deleted: bool,
    },
    /// Neither an active nor a still-open recent surface exists.
    NoTarget,
    /// The surface refused the insertion.
    InsertFailed,
}

/// Paste an entry into the active surface.
///
/// ## Behavior
/// - Target is the active surface, else the last focused one if still open
/// - Without a target: user notice, no state change
/// - A system-slot entry is claimed into durable history
/// - `autoDeleteAfterPaste` removes durable entries only
pub struct PasteHistoryEntry {
    ctx: Arc<HistoryContext>,
}

impl PasteHistoryEntry {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, entry_id: &EntryId) -> Result<PasteOutcome, EngineError> {
        let span = info_span!("usecase.paste_history_entry.execute", entry_id = %entry_id);

        async {
            let (entry, last_surface, auto_delete) = {
                let state = self.ctx.lock().await;
                let entry = state
                    .history
                    .find(entry_id)
                    .cloned()
                    .ok_or_else(|| EngineError::EntryNotFound(entry_id.clone()))?;
                (
                    entry,
                    state.last_surface.clone(),
                    state.settings.auto_delete_after_paste,
                )
            };

            let deps = self.ctx.deps();
            let Some(target) = self.resolve_target(last_surface) else {
                info!("no paste target available");
                deps.notice.notify(NO_PASTE_TARGET_NOTICE);
                return Ok(PasteOutcome::NoTarget);
            };

            if let Err(err) = deps.surfaces.replace_selection(&target, &entry.content).await {
                warn!(error = %err, surface = %target, "paste insertion failed");
                deps.notice.notify(PASTE_FAILED_NOTICE);
                return Ok(PasteOutcome::InsertFailed);
            }
            deps.surfaces.focus(&target);
            self.ctx.lock().await.last_surface = Some(target.clone());

            let mut deleted = false;
            match entry.source {
                EntrySource::SystemSlot => {
                    CaptureInternalCopy::new(self.ctx.clone())
                        .execute(Some(entry.content.clone()))
                        .await?;
                }
                EntrySource::Durable if auto_delete => {
                    DeleteHistoryEntry::new(self.ctx.clone())
                        .execute(&entry.id)
                        .await?;
                    deleted = true;
                }
                EntrySource::Durable => {}
            }

            info!(surface = %target, deleted, "entry pasted");
            Ok(PasteOutcome::Pasted {
                surface: target,
                deleted,
            })
        }
        .instrument(span)
        .await
    }

    fn resolve_target(&self, last_surface: Option<SurfaceId>) -> Option<SurfaceId> {
        let surfaces = &self.ctx.deps().surfaces;
        surfaces
            .active_surface()
            .or_else(|| last_surface.filter(|surface| surfaces.is_open(surface)))
    }
}
