//! Plain-text buffer format used for bulk editing of the history.

pub mod codec;

pub use codec::{decode, encode, SEPARATOR};
