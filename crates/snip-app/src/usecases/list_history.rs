//! Read-side queries over the combined history view

use std::sync::Arc;

use snip_core::history::filter_entries;
use snip_core::view::EntryPreview;
use snip_core::HistoryEntry;

use crate::context::HistoryContext;

/// Ordered merge of durable history and the system slot.
///
/// Returns owned snapshots; callers can never mutate store state through them.
pub struct ListCombinedHistory {
    ctx: Arc<HistoryContext>,
}

impl ListCombinedHistory {
    pub fn new(ctx: Arc<HistoryContext>) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self) -> Vec<HistoryEntry> {
        let state = self.ctx.lock().await;
        state.history.combined(state.settings.pin_system_clipboard)
    }

    /// Combined view narrowed to entries containing `query`, ignoring case.
    pub async fn search(&self, query: &str) -> Vec<HistoryEntry> {
        filter_entries(self.execute().await, query)
    }

    pub async fn previews(&self, query: &str, max_chars: usize) -> Vec<EntryPreview> {
        let now = self.ctx.now_ms();
        self.search(query)
            .await
            .iter()
            .map(|entry| EntryPreview::from_entry(entry, max_chars, now))
            .collect()
    }
}
