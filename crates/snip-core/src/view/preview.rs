use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::entry::{EntrySource, HistoryEntry};
use crate::ids::EntryId;

/// Character budget for compact lists (sidebar).
pub const SIDEBAR_PREVIEW_CHARS: usize = 80;
/// Character budget for the quick switcher.
pub const SWITCHER_PREVIEW_CHARS: usize = 100;

const NEWLINE_MARKER: &str = " ↵ ";

/// Display-ready projection of a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPreview {
    pub id: EntryId,
    pub text: String,
    pub source_label: &'static str,
    pub age: String,
}

impl EntryPreview {
    pub fn from_entry(entry: &HistoryEntry, max_chars: usize, now_ms: i64) -> Self {
        Self {
            id: entry.id.clone(),
            text: truncate_preview(&entry.content, max_chars),
            source_label: source_label(entry.source),
            age: relative_age(entry.timestamp, now_ms),
        }
    }
}

pub fn source_label(source: EntrySource) -> &'static str {
    match source {
        EntrySource::SystemSlot => "System",
        EntrySource::Durable => "Editor",
    }
}

/// Cut `content` to `max_chars` characters and flatten line breaks.
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    let mut text: String = content.chars().take(max_chars).collect();
    if content.chars().count() > max_chars {
        text.push_str("...");
    }
    text.replace("\r\n", "\n").replace('\n', NEWLINE_MARKER)
}

/// Human friendly age of a timestamp relative to `now_ms`.
pub fn relative_age(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = now_ms.saturating_sub(timestamp_ms).max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        match Local.timestamp_millis_opt(timestamp_ms).single() {
            Some(date) => format_date(date),
            None => String::new(),
        }
    }
}

fn format_date(date: DateTime<Local>) -> String {
    date.format("%Y-%m-%d").to_string()
}
