//! Account and resource queries
//!
//! Each operation prints its report and returns the decoded value so the
//! library can be driven without the CLI.

use serde_json::Value;

use crate::az::invoker::{AzCli, AzOutput};
use crate::core::{CloudpilotError, Result};

const DIVIDER: &str = "------------------------------------------------------------";

/// Unwrap structured output, printing raw text when the decode fell back
pub(crate) fn expect_json(output: AzOutput) -> Option<Value> {
    match output {
        AzOutput::Json(value) => Some(value),
        AzOutput::Text(raw) => {
            let trimmed = raw.trim_end();
            if !trimmed.is_empty() {
                println!("{}", trimmed);
            }
            None
        }
    }
}

/// Field access helper for listing output
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("N/A")
}

/// Login to Azure (opens a browser for authentication)
///
/// On success, lists the subscriptions now visible to the session.
pub async fn login(az: &AzCli) -> Result<Value> {
    if !az.is_available().await {
        return Err(CloudpilotError::AzNotFound);
    }
    println!("Opening browser for Azure login...");
    az.run_raw(&["login"]).await?;
    println!("✅ Login successful!");
    list_subscriptions(az).await
}

/// Show the currently active account
pub async fn account_info(az: &AzCli) -> Result<Value> {
    let output = az.run_json(&["account", "show"]).await?;
    let Some(acc) = expect_json(output) else {
        return Ok(Value::Null);
    };

    println!("\n👤 Current Azure Account:");
    println!("{}", DIVIDER);
    println!("  Subscription: {}", field(&acc, "name"));
    println!("  ID: {}", field(&acc, "id"));
    println!("  Tenant: {}", field(&acc, "tenantId"));
    let user = acc
        .pointer("/user/name")
        .and_then(Value::as_str)
        .unwrap_or("N/A");
    println!("  User: {}", user);

    Ok(acc)
}

/// List all subscriptions visible to the session
pub async fn list_subscriptions(az: &AzCli) -> Result<Value> {
    let output = az.run_json(&["account", "list"]).await?;
    let Some(subs) = expect_json(output) else {
        return Ok(Value::Null);
    };

    println!("\n📋 Azure Subscriptions:");
    println!("{}", DIVIDER);
    for sub in subs.as_array().into_iter().flatten() {
        let status = if field(sub, "state") == "Enabled" {
            "✓"
        } else {
            "✗"
        };
        let default = if sub.get("isDefault").and_then(Value::as_bool) == Some(true) {
            " (DEFAULT)"
        } else {
            ""
        };
        println!("  {} {}{}", status, field(sub, "name"), default);
        println!("    ID: {}", field(sub, "id"));
    }

    Ok(subs)
}

/// Set the active subscription
pub async fn set_subscription(az: &AzCli, subscription_id: &str) -> Result<Value> {
    az.run_json(&["account", "set", "--subscription", subscription_id])
        .await?;
    println!("✅ Active subscription set to: {}", subscription_id);
    Ok(Value::Null)
}

/// List all resource groups
pub async fn list_resource_groups(az: &AzCli) -> Result<Value> {
    let output = az.run_json(&["group", "list"]).await?;
    let Some(groups) = expect_json(output) else {
        return Ok(Value::Null);
    };

    println!("\n📁 Resource Groups:");
    println!("{}", DIVIDER);
    for rg in groups.as_array().into_iter().flatten() {
        println!("  • {} ({})", field(rg, "name"), field(rg, "location"));
    }

    Ok(groups)
}

/// List resources, optionally scoped to one resource group
pub async fn list_resources(az: &AzCli, resource_group: Option<&str>) -> Result<Value> {
    let mut args = vec!["resource", "list"];
    if let Some(group) = resource_group {
        args.extend(["--resource-group", group]);
    }

    let output = az.run_json(&args).await?;
    let Some(resources) = expect_json(output) else {
        return Ok(Value::Null);
    };

    let scope = resource_group
        .map(|g| format!(" in {}", g))
        .unwrap_or_default();
    println!("\n🔧 Resources{}:", scope);
    println!("{}", DIVIDER);
    for res in resources.as_array().into_iter().flatten() {
        println!("  • {}", field(res, "name"));
        println!("    Type: {}", field(res, "type"));
        println!("    Location: {}", field(res, "location"));
        println!();
    }

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_json_passes_value_through() {
        let value = json!([{"name": "sub"}]);
        let out = expect_json(AzOutput::Json(value.clone()));
        assert_eq!(out, Some(value));
    }

    #[test]
    fn test_expect_json_swallows_raw_text() {
        let out = expect_json(AzOutput::Text("not json".to_string()));
        assert!(out.is_none());
    }

    #[test]
    fn test_field_missing_key() {
        let value = json!({"name": "thing"});
        assert_eq!(field(&value, "name"), "thing");
        assert_eq!(field(&value, "location"), "N/A");
    }
}
