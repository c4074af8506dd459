use std::io::Write;

use super::{Command, CommandError, Flow, HelpTopic};
use crate::core::state::ExecutionContext;

#[derive(Clone, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "history",
            usage: "history",
            summary: "List the command history.",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, _args: &[String]) -> Result<Flow, CommandError> {
        let out = ctx.console.out();
        for entry in ctx.history.entries() {
            writeln!(out, "{}", entry)?;
        }
        Ok(Flow::Continue(0))
    }
}
