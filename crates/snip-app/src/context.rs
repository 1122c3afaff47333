//! Shared engine context.
//!
//! All mutable engine state lives in one [`EngineState`] behind an async
//! mutex. A mutation holds the lock from its dedup decision until the
//! document write returns, so mutations are applied strictly one at a time
//! and a write always finishes before the next mutation is accepted.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use snip_core::ids::SurfaceId;
use snip_core::{HistoryDocument, HistoryState, Settings};

use crate::deps::AppDeps;
use crate::error::EngineError;

#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub settings: Settings,
    pub history: HistoryState,
    /// Most recent content seen by either capture producer.
    pub cursor: String,
    /// Most recently focused editing surface, used as paste fallback.
    pub last_surface: Option<SurfaceId>,
}

pub struct HistoryContext {
    state: Mutex<EngineState>,
    deps: AppDeps,
}

impl HistoryContext {
    pub fn new(deps: AppDeps, state: EngineState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
            deps,
        })
    }

    /// Load the persisted document and prime the cursor from the clipboard.
    ///
    /// A missing document starts from defaults. Out-of-range settings fall
    /// back to their defaults. A clipboard that cannot be read primes an
    /// empty cursor.
    pub async fn load(deps: AppDeps) -> Result<Arc<Self>, EngineError> {
        let document = deps.document_store.load().await?.unwrap_or_default();
        let (settings, mut history) = document.into_state();

        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                warn!(error = %err, "persisted settings out of range, using defaults for invalid fields");
                settings.repaired()
            }
        };
        let trimmed = history.trim(settings.history_limit);
        if trimmed > 0 {
            debug!(trimmed, "persisted history exceeded the limit");
        }

        let cursor = match deps.clipboard.read_text().await {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "clipboard unreadable at startup, cursor left empty");
                String::new()
            }
        };

        info!(
            entries = history.len(),
            has_system_slot = history.system_slot().is_some(),
            "history loaded"
        );

        Ok(Self::new(
            deps,
            EngineState {
                settings,
                history,
                cursor,
                last_surface: None,
            },
        ))
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn now_ms(&self) -> i64 {
        self.deps.clock.now_ms()
    }

    pub async fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().await
    }

    pub async fn snapshot(&self) -> EngineState {
        self.state.lock().await.clone()
    }

    pub async fn settings(&self) -> Settings {
        self.state.lock().await.settings.clone()
    }

    /// Persist the full document and signal collaborators to refresh.
    ///
    /// Called with the state lock held. The refresh signal fires even when
    /// the write fails, since in-memory state did change.
    pub async fn commit(&self, state: &EngineState) -> Result<(), EngineError> {
        let document = HistoryDocument::from_state(&state.settings, &state.history);
        let result = self.deps.document_store.save(&document).await;
        self.deps.observer.history_changed();

        if let Err(err) = result {
            error!(error = %err, "failed to persist history document");
            return Err(EngineError::Persistence(err));
        }
        debug!(entries = document.history.len(), "history document persisted");
        Ok(())
    }
}
