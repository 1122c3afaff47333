use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use std::sync::{Arc, Mutex};
use tokio::task::spawn_blocking;
use tracing::trace;

use snip_core::ports::{ClipboardAccessError, SystemClipboardPort};

/// Text access to the operating system clipboard.
///
/// clipboard-rs calls block, so every access runs on the blocking pool.
pub struct OsClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl OsClipboard {
    pub fn new() -> Result<Self> {
        let context =
            map_clipboard_err(ClipboardContext::new()).context("ClipboardContext::new failed")?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn read_blocking(ctx: &Mutex<ClipboardContext>) -> Result<String> {
        let ctx = ctx
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        // An empty clipboard or one holding only non-text data reads as "".
        if !ctx.has(ContentFormat::Text) {
            return Ok(String::new());
        }
        map_clipboard_err(ctx.get_text())
    }

    fn write_blocking(ctx: &Mutex<ClipboardContext>, text: String) -> Result<()> {
        let ctx = ctx
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        map_clipboard_err(ctx.set_text(text))
    }
}

#[async_trait]
impl SystemClipboardPort for OsClipboard {
    async fn read_text(&self) -> Result<String, ClipboardAccessError> {
        let inner = self.inner.clone();
        let text = spawn_blocking(move || Self::read_blocking(&inner))
            .await
            .map_err(|e| ClipboardAccessError::Unavailable(e.to_string()))?
            .map_err(|e| ClipboardAccessError::Read(format!("{e:#}")))?;
        trace!(len = text.len(), "clipboard read");
        Ok(text)
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let inner = self.inner.clone();
        let text = text.to_string();
        spawn_blocking(move || Self::write_blocking(&inner, text))
            .await
            .map_err(|e| ClipboardAccessError::Unavailable(e.to_string()))?
            .map_err(|e| ClipboardAccessError::Write(format!("{e:#}")))
    }
}
