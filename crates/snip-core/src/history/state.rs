use std::collections::HashSet;

use crate::entry::{EntrySource, HistoryEntry};
use crate::history::filter::{CaptureFilter, FilterRejection};
use crate::history::projection::project;
use crate::ids::EntryId;
use crate::settings::Settings;

/// Result of offering a candidate to [`HistoryState::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// A new durable entry was prepended.
    ///
    /// `promoted` is set when an older occurrence of the same content was
    /// removed to make room for it; `trimmed` counts tail entries dropped
    /// to honour the history limit.
    Inserted {
        entry: HistoryEntry,
        promoted: bool,
        trimmed: usize,
    },
    /// Duplicates are allowed and the candidate already is the newest entry.
    AlreadyNewest,
    Rejected(FilterRejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    SystemSlotCleared,
    Removed(HistoryEntry),
    NotFound,
}

/// Durable history plus the ephemeral system slot.
///
/// History is newest-first by construction and is never re-sorted. At most
/// one system-slot entry exists and it always carries the sentinel id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    entries: Vec<HistoryEntry>,
    system_slot: Option<HistoryEntry>,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from persisted parts, dropping records that break invariants.
    pub fn restore(history: Vec<HistoryEntry>, system_slot: Option<HistoryEntry>) -> Self {
        let mut seen = HashSet::new();
        #[cfg(feature = "tracing")]
        let persisted = history.len();
        let entries: Vec<HistoryEntry> = history
            .into_iter()
            .filter(|entry| {
                entry.source == EntrySource::Durable
                    && !entry.content.is_empty()
                    && !entry.id.is_system_slot()
                    && seen.insert(entry.id.clone())
            })
            .collect();

        #[cfg(feature = "tracing")]
        if entries.len() != persisted {
            tracing::debug!(
                persisted,
                restored = entries.len(),
                "dropped history records that break store invariants"
            );
        }

        let system_slot = system_slot
            .filter(|entry| !entry.content.is_empty())
            .map(|entry| HistoryEntry::system_slot(entry.content, entry.timestamp));

        Self {
            entries,
            system_slot,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn system_slot(&self) -> Option<&HistoryEntry> {
        self.system_slot.as_ref()
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn is_newest(&self, content: &str) -> bool {
        self.newest().is_some_and(|entry| entry.content == content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &EntryId) -> Option<&HistoryEntry> {
        if id.is_system_slot() {
            return self.system_slot.as_ref();
        }
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Offer `content` as a new durable entry.
    pub fn append(&mut self, content: &str, now_ms: i64, settings: &Settings) -> AppendOutcome {
        if let Err(rejection) = CaptureFilter::from_settings(settings).check(content) {
            return AppendOutcome::Rejected(rejection);
        }

        let mut promoted = false;
        if settings.allow_duplicates {
            if self.is_newest(content) {
                return AppendOutcome::AlreadyNewest;
            }
        } else if let Some(index) = self.entries.iter().position(|e| e.content == content) {
            self.entries.remove(index);
            promoted = true;
        }

        let entry = HistoryEntry::durable(content, now_ms);
        self.entries.insert(0, entry.clone());
        let trimmed = self.trim(settings.history_limit);

        AppendOutcome::Inserted {
            entry,
            promoted,
            trimmed,
        }
    }

    /// Truncate the tail to `limit` entries, returning how many were dropped.
    pub fn trim(&mut self, limit: usize) -> usize {
        if self.entries.len() <= limit {
            return 0;
        }
        let dropped = self.entries.len() - limit;
        self.entries.truncate(limit);
        dropped
    }

    /// Replace the system slot wholesale.
    pub fn set_system_slot(&mut self, content: &str, now_ms: i64) -> &HistoryEntry {
        self.system_slot.insert(HistoryEntry::system_slot(content, now_ms))
    }

    pub fn clear_system_slot(&mut self) -> Option<HistoryEntry> {
        self.system_slot.take()
    }

    /// Clear the slot only when it currently holds `content`.
    pub fn clear_system_slot_matching(&mut self, content: &str) -> bool {
        if self
            .system_slot
            .as_ref()
            .is_some_and(|slot| slot.content == content)
        {
            self.system_slot = None;
            return true;
        }
        false
    }

    /// Remove every durable entry whose content equals `content`.
    pub fn purge_content(&mut self, content: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.content != content);
        before - self.entries.len()
    }

    pub fn delete(&mut self, id: &EntryId) -> DeleteOutcome {
        if id.is_system_slot() {
            self.system_slot = None;
            return DeleteOutcome::SystemSlotCleared;
        }
        match self.entries.iter().position(|entry| &entry.id == id) {
            Some(index) => DeleteOutcome::Removed(self.entries.remove(index)),
            None => DeleteOutcome::NotFound,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.system_slot = None;
    }

    /// Swap in a new durable history wholesale. The system slot is untouched.
    ///
    /// The sentinel id and ids already taken by an earlier entry are
    /// replaced with fresh ones.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>, limit: usize) -> usize {
        let mut seen = HashSet::new();
        self.entries = entries
            .into_iter()
            .filter(|entry| !entry.content.is_empty())
            .map(|entry| {
                let id = if entry.id.is_system_slot() || seen.contains(&entry.id) {
                    EntryId::new()
                } else {
                    entry.id
                };
                seen.insert(id.clone());
                HistoryEntry {
                    source: EntrySource::Durable,
                    id,
                    ..entry
                }
            })
            .collect();
        self.trim(limit)
    }

    /// Owned, ordered view of history and slot.
    pub fn combined(&self, pin_system_slot: bool) -> Vec<HistoryEntry> {
        project(&self.entries, self.system_slot.as_ref(), pin_system_slot)
    }

    pub fn into_parts(self) -> (Vec<HistoryEntry>, Option<HistoryEntry>) {
        (self.entries, self.system_slot)
    }
}
