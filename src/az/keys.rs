//! API key retrieval
//!
//! Keys are never printed in full: display is capped at a fixed prefix
//! followed by a truncation marker.

use serde_json::Value;

use crate::az::invoker::AzCli;
use crate::az::ops::{expect_json, field};
use crate::core::Result;

const DIVIDER: &str = "------------------------------------------------------------";

/// Longest visible prefix of any secret value
const KEY_PREFIX_LEN: usize = 20;

/// Resource types with a key-listing command
pub const KEY_RESOURCE_TYPES: [&str; 3] = ["cognitive", "openai", "storage"];

/// Cap a secret to its display prefix plus a truncation marker
pub fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(KEY_PREFIX_LEN).collect();
    format!("{}...", prefix)
}

/// Get API keys for a resource, dispatching on its type
pub async fn get_keys(
    az: &AzCli,
    resource_type: &str,
    resource_name: &str,
    resource_group: &str,
) -> Result<Value> {
    match resource_type.to_lowercase().as_str() {
        "cognitive" | "openai" => get_cognitive_keys(az, resource_name, resource_group).await,
        "storage" => get_storage_keys(az, resource_name, resource_group).await,
        other => {
            println!("❌ Unknown resource type: {}", other);
            println!("   Supported types: {}", KEY_RESOURCE_TYPES.join(", "));
            Ok(Value::Null)
        }
    }
}

/// Get API keys for Cognitive Services / Azure AI accounts
pub async fn get_cognitive_keys(
    az: &AzCli,
    resource_name: &str,
    resource_group: &str,
) -> Result<Value> {
    let output = az
        .run_json(&[
            "cognitiveservices",
            "account",
            "keys",
            "list",
            "--name",
            resource_name,
            "--resource-group",
            resource_group,
        ])
        .await?;
    let Some(keys) = expect_json(output) else {
        return Ok(Value::Null);
    };

    println!("\n🔑 API Keys for {}:", resource_name);
    println!("{}", DIVIDER);
    println!("  Key1: {}", redact(field(&keys, "key1")));
    println!("  Key2: {}", redact(field(&keys, "key2")));

    Ok(keys)
}

/// Get access keys for a Storage Account
pub async fn get_storage_keys(
    az: &AzCli,
    account_name: &str,
    resource_group: &str,
) -> Result<Value> {
    let output = az
        .run_json(&[
            "storage",
            "account",
            "keys",
            "list",
            "--account-name",
            account_name,
            "--resource-group",
            resource_group,
        ])
        .await?;
    let Some(keys) = expect_json(output) else {
        return Ok(Value::Null);
    };

    println!("\n🔑 Storage Keys for {}:", account_name);
    println!("{}", DIVIDER);
    for key in keys.as_array().into_iter().flatten() {
        println!(
            "  {}: {}",
            field(key, "keyName"),
            redact(field(key, "value"))
        );
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_caps_display_length() {
        let secret = "a".repeat(64);
        let shown = redact(&secret);
        assert_eq!(shown, format!("{}...", "a".repeat(20)));
        assert_eq!(shown.len(), KEY_PREFIX_LEN + 3);
    }

    #[test]
    fn test_redact_short_secret() {
        assert_eq!(redact("abc"), "abc...");
    }

    #[test]
    fn test_redact_is_char_boundary_safe() {
        let secret = "é".repeat(30);
        let shown = redact(&secret);
        assert_eq!(shown.chars().count(), KEY_PREFIX_LEN + 3);
    }
}
