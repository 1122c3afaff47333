//! ID type wrappers for type safety.

mod entry_id;
mod id_macro;

pub use entry_id::{EntryId, SurfaceId, SYSTEM_SLOT_ID};
