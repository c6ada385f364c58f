//! CLI module - command dispatch shared by both binaries

pub mod dispatch;

pub use dispatch::{CommandSpec, CommandTable, DispatchOutcome, Handler};
