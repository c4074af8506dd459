use std::io::Write;

use super::{Command, CommandError, Flow, HelpTopic};
use crate::core::state::ExecutionContext;

#[derive(Clone, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "env",
            usage: "env",
            summary: "Print the environment, one NAME=VALUE per line.",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, _args: &[String]) -> Result<Flow, CommandError> {
        let out = ctx.console.out();
        for (name, value) in ctx.env.iter() {
            writeln!(out, "{}={}", name, value)?;
        }
        Ok(Flow::Continue(0))
    }
}

#[derive(Clone, Default)]
pub struct SetEnvCommand;

impl SetEnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetEnvCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "setenv",
            usage: "setenv NAME VALUE",
            summary: "Create or update an environment variable.",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::InvalidArguments(
                "Incorrect number of arguments".to_string(),
            ));
        };

        ctx.env.set(name, value)?;
        Ok(Flow::Continue(0))
    }
}

#[derive(Clone, Default)]
pub struct UnsetEnvCommand;

impl UnsetEnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetEnvCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "unsetenv",
            usage: "unsetenv NAME...",
            summary: "Remove environment variables.",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments("Too few arguments.".to_string()));
        }

        for name in args {
            ctx.env.unset(name);
        }
        Ok(Flow::Continue(0))
    }
}
