pub mod buffer_session;
pub mod capture_internal_copy;
pub mod clear_history;
pub mod copy_entry;
pub mod delete_entry;
pub mod list_history;
pub mod paste_entry;
pub mod poll_system_clipboard;
pub mod replace_history;
pub mod update_settings;

pub use buffer_session::{CloseHistoryBuffer, OpenHistoryBuffer};
pub use capture_internal_copy::{CaptureInternalCopy, CaptureOutcome};
pub use clear_history::ClearHistory;
pub use copy_entry::{CopyHistoryEntry, CopyOutcome, COPIED_NOTICE};
pub use delete_entry::DeleteHistoryEntry;
pub use list_history::ListCombinedHistory;
pub use paste_entry::{PasteHistoryEntry, PasteOutcome, NO_PASTE_TARGET_NOTICE, PASTE_FAILED_NOTICE};
pub use poll_system_clipboard::{PollOutcome, PollSystemClipboard};
pub use replace_history::{ReplaceHistory, TrimHistory};
pub use update_settings::{SettingsChange, UpdateSettings};
