//! Azure management module
//!
//! Wraps the az CLI: one bounded invocation per operation, pretty console
//! reports, decoded values returned to library callers.

pub mod commands;
pub mod invoker;
pub mod keys;
pub mod ops;
pub mod provision;

pub use commands::command_table;
pub use invoker::{AzCli, AzOutput};
