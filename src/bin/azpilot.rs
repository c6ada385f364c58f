//! azpilot - Azure CLI companion
//!
//! Main entry point for the Azure management tool.

use clap::Parser;
use cloudpilot::az::{self, AzCli};
use cloudpilot::Config;
use tracing_subscriber::EnvFilter;

/// azpilot - manage Azure resources and API keys via the az CLI
#[derive(Parser, Debug)]
#[command(name = "azpilot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command to run (omit to list commands)
    command: Option<String>,

    /// Positional arguments for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Wall-clock bound for one az invocation, in seconds
    #[arg(long, short = 't')]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(timeout) = args.timeout {
        config.az.timeout_secs = timeout;
    }

    let table = az::command_table();

    let Some(command) = args.command else {
        print!("{}", table.help_text());
        return Ok(());
    };

    let az = AzCli::from_config(&config.az);

    // Failures are reported as text; the process itself exits clean.
    if let Err(err) = table.dispatch(&az, &command, &args.args).await {
        println!("❌ {}", err);
    }

    Ok(())
}
