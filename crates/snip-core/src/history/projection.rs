use crate::entry::HistoryEntry;

/// Merge durable history and the system slot into the externally visible order.
///
/// - no slot: history as-is (already newest-first)
/// - pinned slot: slot first, then history
/// - unpinned slot: slot appended, then a stable sort by descending timestamp
pub fn project(
    history: &[HistoryEntry],
    system_slot: Option<&HistoryEntry>,
    pin_system_slot: bool,
) -> Vec<HistoryEntry> {
    let Some(slot) = system_slot else {
        return history.to_vec();
    };

    let mut combined = Vec::with_capacity(history.len() + 1);
    if pin_system_slot {
        combined.push(slot.clone());
        combined.extend_from_slice(history);
        return combined;
    }

    combined.extend_from_slice(history);
    combined.push(slot.clone());
    combined.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    combined
}
