//! # snip-app
//!
//! History reconciliation engine: shared context, use cases, the external
//! clipboard monitor and the application facade.

pub mod app;
pub mod context;
pub mod copy_signal;
pub mod deps;
pub mod error;
pub mod monitor;
pub mod usecases;

pub use app::SnipApp;
pub use context::{EngineState, HistoryContext};
pub use deps::AppDeps;
pub use error::EngineError;
