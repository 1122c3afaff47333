//! Read-side helpers shared by presentation collaborators.

pub mod preview;

pub use preview::{
    relative_age, source_label, truncate_preview, EntryPreview, SIDEBAR_PREVIEW_CHARS,
    SWITCHER_PREVIEW_CHARS,
};
