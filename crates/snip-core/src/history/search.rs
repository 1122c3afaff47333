use crate::entry::HistoryEntry;

/// Case-insensitive substring match over entry content.
///
/// An empty query matches everything. Surrounding whitespace in the query
/// is part of the needle.
pub fn filter_entries(entries: Vec<HistoryEntry>, query: &str) -> Vec<HistoryEntry> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| entry.content.to_lowercase().contains(&needle))
        .collect()
}
