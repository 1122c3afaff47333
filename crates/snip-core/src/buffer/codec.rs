use once_cell::sync::Lazy;
use regex::Regex;

use crate::entry::HistoryEntry;

/// Marker line separating entries in the buffer document.
pub const SEPARATOR: &str = "---";

static SEPARATOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^---\r?$").expect("separator pattern is valid"));

/// Render history as a plain-text document, one entry per block.
///
/// Multi-line content is written verbatim; blocks are joined by a line that
/// holds only the separator.
pub fn encode(history: &[HistoryEntry]) -> String {
    history
        .iter()
        .map(|entry| entry.content.as_str())
        .collect::<Vec<_>>()
        .join(&format!("\n{SEPARATOR}\n"))
}

/// Parse a buffer document back into durable entries.
///
/// Segments are trimmed and empty ones dropped. Each survivor gets a fresh id
/// and a timestamp one millisecond older than the previous one, starting at
/// `now_ms`, so top-to-bottom order is preserved as newest-first. A document
/// without any segment decodes to an empty history.
pub fn decode(text: &str, now_ms: i64) -> Vec<HistoryEntry> {
    SEPARATOR_LINE
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| HistoryEntry::durable(segment, now_ms - index as i64))
        .collect()
}
