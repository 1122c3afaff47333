use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Id of the single ephemeral system-slot entry.
///
/// Durable ids are UUIDs, so the sentinel can never collide with one.
pub const SYSTEM_SLOT_ID: &str = "system-slot";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(String);

impl_id!(EntryId, SurfaceId);

impl EntryId {
    pub fn system_slot() -> Self {
        Self(SYSTEM_SLOT_ID.to_string())
    }

    pub fn is_system_slot(&self) -> bool {
        self.0 == SYSTEM_SLOT_ID
    }
}
