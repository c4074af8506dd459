use std::env;
use std::io::Write;

use super::{Command, CommandError, Flow, HelpTopic};
use crate::core::state::ExecutionContext;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

/// The session's idea of the working directory: `$PWD`, else the real one.
fn current_dir(ctx: &ExecutionContext) -> Option<String> {
    match ctx.env.get_non_empty("PWD") {
        Some(pwd) => Some(pwd.to_string()),
        None => env::current_dir()
            .ok()
            .map(|dir| dir.to_string_lossy().into_owned()),
    }
}

impl Command for CdCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "cd",
            usage: "cd [dir|-]",
            summary: "Change the working directory ($HOME by default, - for $OLDPWD).",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        let previous = current_dir(ctx);

        let (target, announce) = match args.first().map(String::as_str) {
            None => {
                let home = ctx
                    .env
                    .get_non_empty("HOME")
                    .or_else(|| ctx.env.get_non_empty("PWD"))
                    .unwrap_or("/");
                (home.to_string(), false)
            }
            Some("-") => match ctx.env.get_non_empty("OLDPWD") {
                Some(old) => (old.to_string(), true),
                None => {
                    writeln!(ctx.console.out(), "{}", previous.as_deref().unwrap_or(""))?;
                    return Ok(Flow::Continue(1));
                }
            },
            Some(dir) => (dir.to_string(), false),
        };

        env::set_current_dir(&target).map_err(|e| {
            tracing::debug!(dir = %target, error = %e, "chdir failed");
            CommandError::CantChangeDir(target.clone())
        })?;

        let now = env::current_dir()?.to_string_lossy().into_owned();
        if announce {
            writeln!(ctx.console.out(), "{}", now)?;
        }
        if let Some(previous) = previous {
            ctx.env.set("OLDPWD", &previous)?;
        }
        ctx.env.set("PWD", &now)?;
        Ok(Flow::Continue(0))
    }
}
