//! Terminal-backed host collaborators for the command line.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

use snip_core::ids::SurfaceId;
use snip_core::ports::{
    ConfirmRequest, ConfirmationPort, EditorSurfacePort, HistoryObserverPort, NoticePort,
    SurfaceError,
};

pub const STDOUT_SURFACE_ID: &str = "stdout";

/// Standard output acting as the one always-open editing surface.
pub struct StdoutSurface;

#[async_trait]
impl EditorSurfacePort for StdoutSurface {
    fn active_surface(&self) -> Option<SurfaceId> {
        Some(SurfaceId::from(STDOUT_SURFACE_ID))
    }

    fn is_open(&self, surface: &SurfaceId) -> bool {
        surface.as_str() == STDOUT_SURFACE_ID
    }

    async fn replace_selection(&self, surface: &SurfaceId, text: &str) -> Result<(), SurfaceError> {
        if !self.is_open(surface) {
            return Err(SurfaceError::Closed(surface.to_string()));
        }
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .and_then(|_| stdout.flush())
            .map_err(|e| SurfaceError::InsertFailed(e.to_string()))
    }

    fn focus(&self, surface: &SurfaceId) {
        debug!(%surface, "focus requested");
    }
}

/// Short messages for the user on stderr.
pub struct TerminalNotice;

impl NoticePort for TerminalNotice {
    fn notify(&self, message: &str) {
        info!(notice = message, "user notice");
        eprintln!("{message}");
    }
}

/// Nothing renders history in the terminal; refreshes are only traced.
pub struct LoggingObserver;

impl HistoryObserverPort for LoggingObserver {
    fn history_changed(&self) {
        debug!("history changed");
    }
}

/// Asks on stderr and reads a y/N answer from stdin.
pub struct PromptConfirmation {
    assume_yes: bool,
}

impl PromptConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl ConfirmationPort for PromptConfirmation {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = format!("{}\n{} [y/N] ", request.title(), request.message());
        let answer = spawn_blocking(move || -> io::Result<String> {
            let mut stderr = io::stderr().lock();
            stderr.write_all(prompt.as_bytes())?;
            stderr.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_affirmative(&line),
            Ok(Err(err)) => {
                warn!(error = %err, "confirmation prompt failed");
                false
            }
            Err(err) => {
                warn!(error = %err, "confirmation task failed");
                false
            }
        }
    }
}
