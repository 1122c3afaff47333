//! # snip-platform
//!
//! Operating system adapters: the shared clipboard and per-user directories.

pub mod app_dirs;
pub mod clipboard;

pub use app_dirs::{AppDirs, AppDirsError, DirsAppDirs};
pub use clipboard::OsClipboard;
