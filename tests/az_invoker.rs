//! Azure CLI invoker integration tests
//!
//! Drives the invoker against shell one-liners instead of a real az
//! install, so outcome classification can be tested anywhere.

use std::time::Instant;

use cloudpilot::az::{AzCli, AzOutput};
use cloudpilot::CloudpilotError;

#[cfg(unix)]
#[tokio::test]
async fn test_nonzero_exit_is_failure_with_stderr() {
    let az = AzCli::new("sh", 10);
    let result = az
        .run(&["-c", "echo provisioning failed >&2; exit 3"], false)
        .await;

    match result {
        Err(CloudpilotError::Az(msg)) => {
            assert!(msg.contains("provisioning failed"), "got: {}", msg)
        }
        other => panic!("expected Az failure, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_nonzero_exit_never_yields_output() {
    let az = AzCli::new("sh", 10);
    let result = az.run(&["-c", "echo '[]'; exit 1"], true).await;
    assert!(result.is_err(), "non-zero exit must not be a success");
}

#[cfg(unix)]
#[tokio::test]
async fn test_timeout_is_classified_within_margin() {
    let az = AzCli::new("sleep", 1);
    let start = Instant::now();
    let result = az.run(&["5"], false).await;
    let elapsed = start.elapsed();

    match result {
        Err(CloudpilotError::Timeout { secs }) => assert_eq!(secs, 1),
        other => panic!("expected timeout, got {:?}", other),
    }
    assert!(
        elapsed.as_secs() < 3,
        "timeout took {:?}, expected ~1s",
        elapsed
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_structured_output_decodes() {
    let az = AzCli::new("sh", 10);
    let output = az
        .run(&["-c", r#"echo '{"name": "demo", "state": "Enabled"}'"#], true)
        .await
        .unwrap();

    match output {
        AzOutput::Json(value) => {
            assert_eq!(value["name"], "demo");
            assert_eq!(value["state"], "Enabled");
        }
        AzOutput::Text(raw) => panic!("expected decoded JSON, got text: {}", raw),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_undecodable_structured_output_falls_back_to_text() {
    let az = AzCli::new("sh", 10);
    let output = az
        .run(&["-c", "echo this is not json"], true)
        .await
        .unwrap();

    match output {
        AzOutput::Text(raw) => assert!(raw.contains("this is not json")),
        AzOutput::Json(value) => panic!("expected raw text, got JSON: {}", value),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_empty_structured_output_is_text() {
    let az = AzCli::new("sh", 10);
    let output = az.run(&["-c", "true"], true).await.unwrap();
    assert!(matches!(output, AzOutput::Text(_)));
}

#[tokio::test]
async fn test_missing_program_reports_install_hint() {
    let az = AzCli::new("az-binary-that-does-not-exist-anywhere", 5);
    let result = az.run(&["account", "show"], true).await;
    assert!(matches!(result, Err(CloudpilotError::AzNotFound)));
}

#[cfg(unix)]
#[tokio::test]
async fn test_available_program_is_detected() {
    let az = AzCli::new("true", 5);
    assert!(az.is_available().await);
}

#[tokio::test]
async fn test_missing_program_is_not_available() {
    let az = AzCli::new("az-binary-that-does-not-exist-anywhere", 5);
    assert!(!az.is_available().await);
}
