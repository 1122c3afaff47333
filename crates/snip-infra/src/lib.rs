//! # snip-infra
//!
//! Filesystem and time adapters for the snipstack ports.

pub mod fs;
pub mod time;

pub use fs::{FileDocumentRepository, FileHistoryBuffer};
pub use time::SystemClock;
