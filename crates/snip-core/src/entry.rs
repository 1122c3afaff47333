use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// Where a history entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// Persisted history item, captured from the editor or claimed from the system slot.
    Durable,
    /// The unclaimed external clipboard value.
    SystemSlot,
}

/// A single clipboard history item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub content: String,
    /// Milliseconds since the unix epoch.
    pub timestamp: i64,
    pub source: EntrySource,
}

impl HistoryEntry {
    pub fn durable(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: EntryId::new(),
            content: content.into(),
            timestamp,
            source: EntrySource::Durable,
        }
    }

    pub fn system_slot(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: EntryId::system_slot(),
            content: content.into(),
            timestamp,
            source: EntrySource::SystemSlot,
        }
    }

    pub fn is_system_slot(&self) -> bool {
        self.source == EntrySource::SystemSlot
    }
}
