//! External clipboard monitor.
//!
//! Drives [`PollSystemClipboard`] from a background task on a fixed tokio
//! interval. Start and stop are idempotent; stop waits for the task to be
//! gone before returning.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::context::HistoryContext;
use crate::usecases::PollSystemClipboard;

pub struct ClipboardMonitor {
    ctx: Arc<HistoryContext>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl ClipboardMonitor {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self {
            ctx,
            handle: Mutex::new(None),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Start polling with the configured interval.
    ///
    /// No-op when already running or when tracking is disabled.
    pub async fn start(&self) {
        let mut handle = self.handle.lock().await;
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            debug!("clipboard monitor already running");
            return;
        }

        let settings = self.ctx.settings().await;
        if !settings.track_system_clipboard {
            debug!("system clipboard tracking disabled, monitor not started");
            return;
        }

        let period = settings.polling_period();
        let poll = PollSystemClipboard::new(self.ctx.clone());
        *handle = Some(tokio::spawn(run_poll_loop(poll, period)));
        info!(interval_ms = settings.polling_interval, "clipboard monitor started");
    }

    pub async fn stop(&self) {
        let Some(handle) = self.handle.lock().await.take() else {
            return;
        };
        handle.abort();
        match handle.await {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!(error = %err, "clipboard monitor task ended abnormally"),
        }
        info!("clipboard monitor stopped");
    }

    /// Stop, then start again with the current settings.
    pub async fn restart(&self) {
        self.stop().await;
        self.start().await;
    }
}

async fn run_poll_loop(poll: PollSystemClipboard, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match poll.execute().await {
            Ok(outcome) => trace!(?outcome, "clipboard poll tick"),
            Err(err) => warn!(error = %err, "clipboard poll failed"),
        }
    }
}
