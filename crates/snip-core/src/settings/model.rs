use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const HISTORY_LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=5000;
pub const POLLING_INTERVAL_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=10_000;

/// What the launcher button opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RibbonAction {
    Sidebar,
    FullView,
}

/// Engine settings, persisted inside the history document.
///
/// Missing fields fall back to [`Settings::default`] so documents written by
/// older builds keep loading after new fields are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub history_limit: usize,
    /// Milliseconds between two system clipboard polls.
    pub polling_interval: u64,
    pub allow_duplicates: bool,
    pub ignore_whitespace_only: bool,
    pub minimum_character_count: usize,
    pub auto_delete_after_paste: bool,
    pub track_system_clipboard: bool,
    pub pin_system_clipboard: bool,
    pub ribbon_action: RibbonAction,
}

impl Settings {
    pub fn polling_period(&self) -> Duration {
        Duration::from_millis(self.polling_interval)
    }
}
