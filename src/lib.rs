//! cloudpilot - Azure and web automation companions
//!
//! Two thin command-line tools over a shared core:
//!
//! - **azpilot** shells out to the Azure CLI to manage resources and
//!   retrieve API keys.
//! - **webpilot** drives headless Chromium to search, capture, and
//!   extract page content.
//!
//! # Architecture
//!
//! - **Core**: configuration and error handling
//! - **CLI**: the static command table and dispatcher
//! - **Az**: the Azure CLI invoker and its operations
//! - **Browser**: scoped Chromium sessions and their operations
//!
//! Both tools follow the same shape: dispatch a command name, invoke the
//! external tool or engine once, format the outcome, exit.

pub mod az;
pub mod browser;
pub mod cli;
pub mod core;

// Re-export commonly used items
pub use self::cli::{CommandSpec, CommandTable, DispatchOutcome};
pub use self::core::{CloudpilotError, Config, Result};
