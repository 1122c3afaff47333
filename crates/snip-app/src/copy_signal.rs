use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::context::HistoryContext;
use crate::usecases::CaptureInternalCopy;

/// Delay between a copy signal and the clipboard read.
pub const COPY_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Debounces internal copy signals into clipboard captures.
///
/// Every signal cancels the pending capture, so a burst of copies results
/// in one read once the clipboard has settled.
pub struct CopySignalDebouncer {
    ctx: Arc<HistoryContext>,
    pending: Mutex<Option<AbortHandle>>,
}

impl CopySignalDebouncer {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self {
            ctx,
            pending: Mutex::new(None),
        }
    }

    pub fn signal(&self) {
        let capture = CaptureInternalCopy::new(self.ctx.clone());
        let task = tokio::spawn(async move {
            sleep(COPY_SETTLE_DELAY).await;
            // Detached so a later signal cannot abort a capture mid-write.
            tokio::spawn(async move {
                match capture.execute(None).await {
                    Ok(outcome) => debug!(?outcome, "copy signal handled"),
                    Err(err) => warn!(error = %err, "copy signal capture failed"),
                }
            });
        });

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.replace(task.abort_handle()) {
            previous.abort();
        }
    }

    /// Drop a capture that has not fired yet.
    pub fn cancel(&self) {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}
