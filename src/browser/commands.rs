//! webpilot command table
//!
//! Every command prints a pretty-printed JSON report on success.

use futures::future::BoxFuture;
use serde::Serialize;

use crate::browser::ops;
use crate::cli::{CommandSpec, CommandTable};
use crate::core::{BrowserConfig, Result};

/// Build the webpilot command table
pub fn command_table() -> CommandTable<BrowserConfig> {
    CommandTable::new(
        "webpilot",
        vec![
            CommandSpec {
                name: "search",
                usage: "search <query...>",
                summary: "Search the web and return the top results",
                min_args: 1,
                run: cmd_search,
            },
            CommandSpec {
                name: "screenshot",
                usage: "screenshot <url> <output_path>",
                summary: "Save a full-page screenshot",
                min_args: 2,
                run: cmd_screenshot,
            },
            CommandSpec {
                name: "get_text",
                usage: "get_text <url>",
                summary: "Extract the page title and visible text",
                min_args: 1,
                run: cmd_get_text,
            },
            CommandSpec {
                name: "get_html",
                usage: "get_html <url>",
                summary: "Extract the page markup",
                min_args: 1,
                run: cmd_get_html,
            },
            CommandSpec {
                name: "click_extract",
                usage: "click_extract <url> <click_selector> <extract_selector>",
                summary: "Click an element, then extract text from another",
                min_args: 3,
                run: cmd_click_extract,
            },
        ],
    )
}

fn print_report<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn cmd_search<'a>(cfg: &'a BrowserConfig, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let query = args.join(" ");
        let report = ops::search(cfg, &query).await?;
        print_report(&report)
    })
}

fn cmd_screenshot<'a>(cfg: &'a BrowserConfig, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let report = ops::take_screenshot(cfg, &args[0], &args[1]).await?;
        print_report(&report)
    })
}

fn cmd_get_text<'a>(cfg: &'a BrowserConfig, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let report = ops::get_page_text(cfg, &args[0]).await?;
        print_report(&report)
    })
}

fn cmd_get_html<'a>(cfg: &'a BrowserConfig, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let report = ops::get_page_html(cfg, &args[0]).await?;
        print_report(&report)
    })
}

fn cmd_click_extract<'a>(cfg: &'a BrowserConfig, args: &'a [String]) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let report = ops::click_and_extract(cfg, &args[0], &args[1], &args[2]).await?;
        print_report(&report)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_command() {
        let table = command_table();
        let names = table.command_names();
        for expected in ["search", "screenshot", "get_text", "get_html", "click_extract"] {
            assert!(names.contains(&expected), "missing command {}", expected);
        }
    }

    #[test]
    fn test_screenshot_requires_url_and_path() {
        let table = command_table();
        assert_eq!(table.find("screenshot").unwrap().min_args, 2);
    }

    #[test]
    fn test_search_requires_a_query() {
        let table = command_table();
        assert_eq!(table.find("search").unwrap().min_args, 1);
    }
}
