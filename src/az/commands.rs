//! azpilot command table
//!
//! Wires each command name to its operation, with usage strings and
//! minimum arities checked by the dispatcher.

use futures::future::BoxFuture;

use crate::az::invoker::AzCli;
use crate::az::{keys, ops, provision};
use crate::cli::{CommandSpec, CommandTable};
use crate::core::Result;

/// Build the azpilot command table
pub fn command_table() -> CommandTable<AzCli> {
    CommandTable::new(
        "azpilot",
        vec![
            CommandSpec {
                name: "login",
                usage: "login",
                summary: "Authenticate with Azure (opens a browser)",
                min_args: 0,
                run: cmd_login,
            },
            CommandSpec {
                name: "account",
                usage: "account",
                summary: "Show the active account",
                min_args: 0,
                run: cmd_account,
            },
            CommandSpec {
                name: "list_subscriptions",
                usage: "list_subscriptions",
                summary: "List all subscriptions",
                min_args: 0,
                run: cmd_list_subscriptions,
            },
            CommandSpec {
                name: "set_subscription",
                usage: "set_subscription <id>",
                summary: "Set the active subscription",
                min_args: 1,
                run: cmd_set_subscription,
            },
            CommandSpec {
                name: "list_groups",
                usage: "list_groups",
                summary: "List resource groups",
                min_args: 0,
                run: cmd_list_groups,
            },
            CommandSpec {
                name: "list_resources",
                usage: "list_resources [group]",
                summary: "List resources, optionally scoped to a group",
                min_args: 0,
                run: cmd_list_resources,
            },
            CommandSpec {
                name: "get_keys",
                usage: "get_keys <type> <name> <group>",
                summary: "Get API keys (types: cognitive, openai, storage)",
                min_args: 3,
                run: cmd_get_keys,
            },
            CommandSpec {
                name: "create_resource_group",
                usage: "create_resource_group <name> [location]",
                summary: "Create a resource group (default location: eastus)",
                min_args: 1,
                run: cmd_create_resource_group,
            },
            CommandSpec {
                name: "create_cognitive",
                usage: "create_cognitive <name> <group> [kind]",
                summary: "Create a Cognitive Services account",
                min_args: 2,
                run: cmd_create_cognitive,
            },
            CommandSpec {
                name: "create_storage",
                usage: "create_storage <name> <group>",
                summary: "Create a storage account",
                min_args: 2,
                run: cmd_create_storage,
            },
            CommandSpec {
                name: "create_openai",
                usage: "create_openai <name> <group>",
                summary: "Create an Azure OpenAI account",
                min_args: 2,
                run: cmd_create_openai,
            },
            CommandSpec {
                name: "list_deployments",
                usage: "list_deployments <name> <group>",
                summary: "List model deployments on an OpenAI account",
                min_args: 2,
                run: cmd_list_deployments,
            },
            CommandSpec {
                name: "create_deployment",
                usage: "create_deployment <name> <group> <deployment> [model] [version]",
                summary: "Deploy a model onto an OpenAI account",
                min_args: 3,
                run: cmd_create_deployment,
            },
        ],
    )
}

fn cmd_login<'a>(az: &'a AzCli, _args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move { ops::login(az).await.map(drop) })
}

fn cmd_account<'a>(az: &'a AzCli, _args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move { ops::account_info(az).await.map(drop) })
}

fn cmd_list_subscriptions<'a>(az: &'a AzCli, _args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move { ops::list_subscriptions(az).await.map(drop) })
}

fn cmd_set_subscription<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move { ops::set_subscription(az, &args[0]).await.map(drop) })
}

fn cmd_list_groups<'a>(az: &'a AzCli, _args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move { ops::list_resource_groups(az).await.map(drop) })
}

fn cmd_list_resources<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let group = args.first().map(String::as_str);
        ops::list_resources(az, group).await.map(drop)
    })
}

fn cmd_get_keys<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        keys::get_keys(az, &args[0], &args[1], &args[2])
            .await
            .map(drop)
    })
}

fn cmd_create_resource_group<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let location = args
            .get(1)
            .map(String::as_str)
            .unwrap_or(provision::DEFAULT_LOCATION);
        provision::create_resource_group(az, &args[0], location)
            .await
            .map(drop)
    })
}

fn cmd_create_cognitive<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let kind = args
            .get(2)
            .map(String::as_str)
            .unwrap_or(provision::DEFAULT_COGNITIVE_KIND);
        provision::create_cognitive_service(az, &args[0], &args[1], kind)
            .await
            .map(drop)
    })
}

fn cmd_create_storage<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        provision::create_storage_account(az, &args[0], &args[1])
            .await
            .map(drop)
    })
}

fn cmd_create_openai<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        provision::create_openai_service(az, &args[0], &args[1])
            .await
            .map(drop)
    })
}

fn cmd_list_deployments<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        provision::list_deployments(az, &args[0], &args[1])
            .await
            .map(drop)
    })
}

fn cmd_create_deployment<'a>(az: &'a AzCli, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let model = args.get(3).map(String::as_str).unwrap_or("gpt-4");
        let version = args
            .get(4)
            .map(String::as_str)
            .unwrap_or("turbo-2024-04-09");
        provision::create_deployment(az, &args[0], &args[1], &args[2], model, version)
            .await
            .map(drop)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_command() {
        let table = command_table();
        let names = table.command_names();
        for expected in [
            "login",
            "account",
            "list_subscriptions",
            "set_subscription",
            "list_groups",
            "list_resources",
            "get_keys",
            "create_resource_group",
            "create_cognitive",
            "create_storage",
            "create_openai",
            "list_deployments",
            "create_deployment",
        ] {
            assert!(names.contains(&expected), "missing command {}", expected);
        }
    }

    #[test]
    fn test_get_keys_requires_three_args() {
        let table = command_table();
        let spec = table.find("get_keys").unwrap();
        assert_eq!(spec.min_args, 3);
    }

    #[test]
    fn test_optional_args_not_required() {
        let table = command_table();
        assert_eq!(table.find("list_resources").unwrap().min_args, 0);
        assert_eq!(table.find("create_resource_group").unwrap().min_args, 1);
        assert_eq!(table.find("create_cognitive").unwrap().min_args, 2);
    }
}
