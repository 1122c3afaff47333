//! The single persisted document: settings, durable history and system slot.

use serde::{Deserialize, Serialize};

use crate::entry::HistoryEntry;
use crate::history::HistoryState;
use crate::settings::Settings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryDocument {
    pub settings: Settings,
    pub history: Vec<HistoryEntry>,
    pub system_entry: Option<HistoryEntry>,
}

impl HistoryDocument {
    pub fn from_state(settings: &Settings, state: &HistoryState) -> Self {
        Self {
            settings: settings.clone(),
            history: state.entries().to_vec(),
            system_entry: state.system_slot().cloned(),
        }
    }

    pub fn into_state(self) -> (Settings, HistoryState) {
        let state = HistoryState::restore(self.history, self.system_entry);
        (self.settings, state)
    }
}
