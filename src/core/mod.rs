//! Core module - shared infrastructure for cloudpilot
//!
//! This module contains configuration and error handling used by both tools.

pub mod config;
pub mod error;

pub use config::{AzConfig, BrowserConfig, Config};
pub use error::{CloudpilotError, Result};
