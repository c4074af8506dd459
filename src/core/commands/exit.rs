use super::{Command, CommandError, Flow, HelpTopic};
use crate::core::state::ExecutionContext;

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Accepts an optional `+` followed by decimal digits, up to `i32::MAX`.
fn parse_status(arg: &str) -> Option<i32> {
    let digits = arg.strip_prefix('+').unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl Command for ExitCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "exit",
            usage: "exit [n]",
            summary: "Exit the shell with status n, or the last status.",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        match args.first() {
            None => Ok(Flow::Exit(ctx.last_status)),
            Some(arg) => parse_status(arg)
                .map(Flow::Exit)
                .ok_or_else(|| CommandError::IllegalNumber(arg.clone())),
        }
    }
}
