//! Browser automation module
//!
//! Drives headless Chromium over the DevTools protocol, one isolated
//! session per operation.

pub mod commands;
pub mod ops;
pub mod session;

pub use commands::command_table;
pub use ops::{
    ClickExtractReport, PageHtmlReport, PageTextReport, ScreenshotReport, SearchHit, SearchReport,
};
pub use session::{with_session, Session};
