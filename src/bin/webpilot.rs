//! webpilot - headless browser companion
//!
//! Main entry point for the web automation tool.

use clap::Parser;
use cloudpilot::browser;
use cloudpilot::Config;
use tracing_subscriber::EnvFilter;

/// webpilot - search, capture, and extract web pages headlessly
#[derive(Parser, Debug)]
#[command(name = "webpilot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command to run (omit to list commands)
    command: Option<String>,

    /// Positional arguments for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,
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
    if args.headed {
        config.browser.headed = true;
    }

    let table = browser::command_table();

    let Some(command) = args.command else {
        print!("{}", table.help_text());
        return Ok(());
    };

    // Usage problems print text and return clean; browser faults propagate.
    table.dispatch(&config.browser, &command, &args.args).await?;

    Ok(())
}
