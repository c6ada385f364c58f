//! Command dispatch
//!
//! Maps a command name to its handler through a statically constructed
//! table. Unknown names and missing arguments are reported as usage text,
//! never as process errors.

use futures::future::BoxFuture;

use crate::core::Result;

/// Handler signature: borrows the tool context and the positional arguments.
pub type Handler<Ctx> = for<'a> fn(&'a Ctx, &'a [String]) -> BoxFuture<'a, Result<()>>;

/// One entry in the command table
pub struct CommandSpec<Ctx> {
    /// Command name as typed on the command line
    pub name: &'static str,
    /// Usage line shown when arguments are missing
    pub usage: &'static str,
    /// One-line description for the command listing
    pub summary: &'static str,
    /// Minimum number of positional arguments
    pub min_args: usize,
    /// Handler invoked once arity has been checked
    pub run: Handler<Ctx>,
}

/// What dispatch did with the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler was invoked and completed
    Ran,
    /// Command name not in the table; listing was printed
    NotFound,
    /// Too few arguments; usage line was printed
    Usage,
}

/// Lookup table for one tool's commands
///
/// Built once at startup and passed by reference into `dispatch`.
pub struct CommandTable<Ctx> {
    tool: &'static str,
    commands: Vec<CommandSpec<Ctx>>,
}

impl<Ctx> CommandTable<Ctx> {
    /// Create a table for the named tool
    pub fn new(tool: &'static str, commands: Vec<CommandSpec<Ctx>>) -> Self {
        Self { tool, commands }
    }

    /// Look up a command by name
    pub fn find(&self, name: &str) -> Option<&CommandSpec<Ctx>> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// All registered command names, in table order
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }

    /// Full command listing with usage lines
    pub fn help_text(&self) -> String {
        let mut out = format!("Usage: {} <command> [args...]\n\nCommands:\n", self.tool);
        for spec in &self.commands {
            out.push_str(&format!("  {:<24} {}\n", spec.usage, spec.summary));
        }
        out
    }

    /// Route one request to its handler
    ///
    /// Unknown command and short-argument conditions print usage text and
    /// return a non-`Ran` outcome without touching any handler. Handler
    /// errors propagate to the caller for formatting.
    pub async fn dispatch(
        &self,
        ctx: &Ctx,
        name: &str,
        args: &[String],
    ) -> Result<DispatchOutcome> {
        let name = name.to_lowercase();

        let spec = match self.find(&name) {
            Some(spec) => spec,
            None => {
                println!("Unknown command: {}", name);
                println!("Available: {}", self.command_names().join(", "));
                return Ok(DispatchOutcome::NotFound);
            }
        };

        if args.len() < spec.min_args {
            println!("Usage: {} {}", self.tool, spec.usage);
            return Ok(DispatchOutcome::Usage);
        }

        (spec.run)(ctx, args).await?;
        Ok(DispatchOutcome::Ran)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn mark<'a>(flag: &'a AtomicBool, _args: &'a [String]) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        })
    }

    fn table() -> CommandTable<AtomicBool> {
        CommandTable::new(
            "testtool",
            vec![
                CommandSpec {
                    name: "touch",
                    usage: "touch <path>",
                    summary: "Mark the flag",
                    min_args: 1,
                    run: mark,
                },
                CommandSpec {
                    name: "noop",
                    usage: "noop",
                    summary: "Do nothing",
                    min_args: 0,
                    run: mark,
                },
            ],
        )
    }

    #[tokio::test]
    async fn test_unknown_command_does_not_invoke_handler() {
        let table = table();
        let flag = AtomicBool::new(false);

        let outcome = table.dispatch(&flag, "bogus", &[]).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::NotFound);
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_insufficient_args_does_not_invoke_handler() {
        let table = table();
        let flag = AtomicBool::new(false);

        let outcome = table.dispatch(&flag, "touch", &[]).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Usage);
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_sufficient_args_invokes_handler() {
        let table = table();
        let flag = AtomicBool::new(false);

        let args = vec!["some-path".to_string()];
        let outcome = table.dispatch(&flag, "touch", &args).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Ran);
        assert!(flag.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_command_name_is_case_insensitive() {
        let table = table();
        let flag = AtomicBool::new(false);

        let outcome = table.dispatch(&flag, "NOOP", &[]).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Ran);
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_help_text_lists_every_command() {
        let table = table();
        let help = table.help_text();
        for name in table.command_names() {
            assert!(help.contains(name), "help text missing {}", name);
        }
    }
}
