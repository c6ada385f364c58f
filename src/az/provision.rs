//! Resource creation and model deployments

use serde_json::Value;

use crate::az::invoker::AzCli;
use crate::az::keys::{get_cognitive_keys, get_storage_keys};
use crate::az::ops::{expect_json, field};
use crate::core::Result;

const DIVIDER: &str = "------------------------------------------------------------";

/// Default region for created resources
pub const DEFAULT_LOCATION: &str = "eastus";

/// Default kind for Cognitive Services accounts
pub const DEFAULT_COGNITIVE_KIND: &str = "CognitiveServices";

/// Create a new resource group
pub async fn create_resource_group(az: &AzCli, name: &str, location: &str) -> Result<Value> {
    let output = az
        .run_json(&["group", "create", "--name", name, "--location", location])
        .await?;
    let group = expect_json(output).unwrap_or(Value::Null);
    println!("✅ Resource group '{}' created in {}", name, location);
    Ok(group)
}

/// Create a Cognitive Services account and print its keys
///
/// Kinds include CognitiveServices, OpenAI, FormRecognizer, ComputerVision,
/// TextAnalytics, SpeechServices.
pub async fn create_cognitive_service(
    az: &AzCli,
    name: &str,
    resource_group: &str,
    kind: &str,
) -> Result<Value> {
    az.run_json(&[
        "cognitiveservices",
        "account",
        "create",
        "--name",
        name,
        "--resource-group",
        resource_group,
        "--kind",
        kind,
        "--sku",
        "S0",
        "--location",
        DEFAULT_LOCATION,
        "--yes",
    ])
    .await?;
    println!("✅ Cognitive Service '{}' ({}) created", name, kind);
    get_cognitive_keys(az, name, resource_group).await
}

/// Create a Storage Account and print its access keys
pub async fn create_storage_account(
    az: &AzCli,
    name: &str,
    resource_group: &str,
) -> Result<Value> {
    az.run_json(&[
        "storage",
        "account",
        "create",
        "--name",
        name,
        "--resource-group",
        resource_group,
        "--sku",
        "Standard_LRS",
        "--location",
        DEFAULT_LOCATION,
    ])
    .await?;
    println!("✅ Storage account '{}' created", name);
    get_storage_keys(az, name, resource_group).await
}

/// Create an Azure OpenAI account
pub async fn create_openai_service(az: &AzCli, name: &str, resource_group: &str) -> Result<Value> {
    create_cognitive_service(az, name, resource_group, "OpenAI").await
}

/// List model deployments on an OpenAI account
pub async fn list_deployments(az: &AzCli, resource_name: &str, resource_group: &str) -> Result<Value> {
    let output = az
        .run_json(&[
            "cognitiveservices",
            "account",
            "deployment",
            "list",
            "--name",
            resource_name,
            "--resource-group",
            resource_group,
        ])
        .await?;
    let Some(deployments) = expect_json(output) else {
        return Ok(Value::Null);
    };

    println!("\n🤖 Deployments for {}:", resource_name);
    println!("{}", DIVIDER);
    for dep in deployments.as_array().into_iter().flatten() {
        println!("  • {}", field(dep, "name"));
        let model = dep
            .pointer("/properties/model/name")
            .and_then(Value::as_str)
            .unwrap_or("N/A");
        println!("    Model: {}", model);
    }

    Ok(deployments)
}

/// Deploy a model onto an OpenAI account
pub async fn create_deployment(
    az: &AzCli,
    resource_name: &str,
    resource_group: &str,
    deployment_name: &str,
    model_name: &str,
    model_version: &str,
) -> Result<Value> {
    let output = az
        .run_json(&[
            "cognitiveservices",
            "account",
            "deployment",
            "create",
            "--name",
            resource_name,
            "--resource-group",
            resource_group,
            "--deployment-name",
            deployment_name,
            "--model-name",
            model_name,
            "--model-version",
            model_version,
            "--model-format",
            "OpenAI",
        ])
        .await?;
    let deployment = expect_json(output).unwrap_or(Value::Null);
    println!(
        "✅ Deployment '{}' ({}) created",
        deployment_name, model_name
    );
    Ok(deployment)
}
