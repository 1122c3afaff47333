//! # snipstack
//!
//! Command line host for the snipstack clipboard history engine: host
//! configuration, tracing setup, adapter wiring and the CLI itself.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
