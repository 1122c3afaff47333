//! Clipboard history domain: capture filter, store state, combined view and search.

pub mod filter;
pub mod projection;
pub mod search;
pub mod state;

pub use filter::{CaptureFilter, FilterRejection};
pub use projection::project;
pub use search::filter_entries;
pub use state::{AppendOutcome, DeleteOutcome, HistoryState};
