//! # snip-core
//!
//! Core domain models and history reconciliation rules for snipstack.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod buffer;
pub mod document;
pub mod entry;
pub mod history;
pub mod ids;
pub mod ports;
pub mod settings;
pub mod view;

// Re-export commonly used types at the crate root
pub use document::HistoryDocument;
pub use entry::{EntrySource, HistoryEntry};
pub use history::{AppendOutcome, CaptureFilter, DeleteOutcome, FilterRejection, HistoryState};
pub use ids::{EntryId, SurfaceId, SYSTEM_SLOT_ID};
pub use settings::{RibbonAction, Settings, SettingsError};
