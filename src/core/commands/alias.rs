use std::io::Write;

use super::{Command, CommandError, Flow, HelpTopic};
use crate::core::state::ExecutionContext;

#[derive(Clone, Default)]
pub struct AliasCommand;

impl AliasCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Rejoins `name='several words'` that the tokenizer split apart. The
/// quotes around the value are dropped.
fn join_quoted(args: &[String]) -> Vec<String> {
    let mut joined = Vec::with_capacity(args.len());
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let Some((name, value)) = arg.split_once('=') else {
            joined.push(arg.clone());
            continue;
        };
        let Some(quote) = value.chars().next().filter(|c| *c == '\'' || *c == '"') else {
            joined.push(arg.clone());
            continue;
        };

        let mut value = value[1..].to_string();
        let mut closed = value.ends_with(quote);
        while !closed {
            match iter.next() {
                Some(next) => {
                    value.push(' ');
                    value.push_str(next);
                    closed = next.ends_with(quote);
                }
                None => break,
            }
        }
        if closed {
            value.pop();
        }
        joined.push(format!("{}={}", name, value));
    }

    joined
}

impl Command for AliasCommand {
    fn topic(&self) -> HelpTopic {
        HelpTopic {
            name: "alias",
            usage: "alias [name[=value] ...]",
            summary: "Define, remove, or list aliases.",
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() {
            let out = ctx.console.out();
            for (name, value) in ctx.aliases.iter() {
                writeln!(out, "{}='{}'", name, value)?;
            }
            return Ok(Flow::Continue(0));
        }

        let mut status = 0;
        for arg in join_quoted(args) {
            match arg.split_once('=') {
                Some((name, value)) if !name.is_empty() => ctx.aliases.set(name, value),
                Some(_) => {
                    ctx.report("alias", &CommandError::NotFound(arg.clone()).to_string());
                    status = 1;
                }
                None => match ctx.aliases.get(&arg) {
                    Some(value) => {
                        let line = format!("{}='{}'", arg, value);
                        writeln!(ctx.console.out(), "{}", line)?;
                    }
                    None => {
                        ctx.report("alias", &CommandError::NotFound(arg.clone()).to_string());
                        status = 1;
                    }
                },
            }
        }

        Ok(Flow::Continue(status))
    }
}
