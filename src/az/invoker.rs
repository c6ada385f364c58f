//! Azure CLI invoker
//!
//! Provides an async interface to az commands with a bounded wall-clock
//! timeout and structured-output decoding.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::core::{AzConfig, CloudpilotError, Result};

/// Outcome of a successful az invocation
///
/// Structured mode that produces undecodable output falls back to `Text`,
/// so callers always branch on what they actually received.
#[derive(Debug, Clone)]
pub enum AzOutput {
    /// Output decoded as JSON
    Json(serde_json::Value),
    /// Raw captured text (raw mode, or a failed decode)
    Text(String),
}

impl AzOutput {
    /// The decoded value, if this outcome carries one
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            AzOutput::Json(v) => Some(v),
            AzOutput::Text(_) => None,
        }
    }
}

/// Executor for Azure management via the az CLI
pub struct AzCli {
    /// Program to invoke (normally "az" on PATH)
    program: String,
    /// Wall-clock bound for one invocation
    timeout_secs: u64,
}

impl AzCli {
    /// Create a new invoker
    pub fn new(program: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            program: program.into(),
            timeout_secs,
        }
    }

    /// Create an invoker from configuration
    pub fn from_config(cfg: &AzConfig) -> Self {
        Self::new(&cfg.program, cfg.timeout_secs)
    }

    /// Check if the Azure CLI is installed
    pub async fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Run an az command, requesting JSON output
    pub async fn run_json(&self, args: &[&str]) -> Result<AzOutput> {
        self.run(args, true).await
    }

    /// Run an az command in raw text mode
    pub async fn run_raw(&self, args: &[&str]) -> Result<String> {
        match self.run(args, false).await? {
            AzOutput::Text(text) => Ok(text),
            // Raw mode never decodes, but keep the match total.
            AzOutput::Json(value) => Ok(value.to_string()),
        }
    }

    /// Run an az command and classify the outcome
    ///
    /// With `structured` set, `-o json` is appended and a decode is
    /// attempted; decode failure falls back to the raw text.
    pub async fn run(&self, args: &[&str], structured: bool) -> Result<AzOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);

        if structured {
            cmd.args(["-o", "json"]);
        }

        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // Drop the child if the timeout fires.
        cmd.kill_on_drop(true);

        debug!(program = %self.program, ?args, "running az command");

        let output = timeout(Duration::from_secs(self.timeout_secs), cmd.output())
            .await
            .map_err(|_| CloudpilotError::Timeout {
                secs: self.timeout_secs,
            })?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CloudpilotError::AzNotFound
                } else {
                    CloudpilotError::az(format!("Failed to run {}: {}", self.program, e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                stderr.into_owned()
            };
            return Err(CloudpilotError::az(message.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if structured && !stdout.trim().is_empty() {
            match serde_json::from_str(stdout.trim()) {
                Ok(value) => return Ok(AzOutput::Json(value)),
                Err(err) => {
                    debug!(%err, "structured output did not decode, keeping raw text");
                    return Ok(AzOutput::Text(stdout));
                }
            }
        }

        Ok(AzOutput::Text(stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoker_creation() {
        let az = AzCli::new("az", 120);
        assert_eq!(az.program, "az");
        assert_eq!(az.timeout_secs, 120);
    }

    #[test]
    fn test_from_config() {
        let cfg = AzConfig {
            program: "az".to_string(),
            timeout_secs: 30,
        };
        let az = AzCli::from_config(&cfg);
        assert_eq!(az.timeout_secs, 30);
    }

    #[test]
    fn test_output_as_json() {
        let json = AzOutput::Json(serde_json::json!({"ok": true}));
        assert!(json.as_json().is_some());

        let text = AzOutput::Text("plain".to_string());
        assert!(text.as_json().is_none());
    }
}
