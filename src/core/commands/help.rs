use std::io::Write;

use super::{Command, CommandError, Flow, HelpTopic};
use crate::core::state::ExecutionContext;
use crate::highlight::SyntaxHighlighter;

#[derive(Clone)]
pub struct HelpCommand {
    topics: Vec<HelpTopic>,
}

impl HelpCommand {
    pub const TOPIC: HelpTopic = HelpTopic {
        name: "help",
        usage: "help [builtin]",
        summary: "Describe the builtins.",
    };

    pub fn new(topics: Vec<HelpTopic>) -> Self {
        Self { topics }
    }
}

impl Command for HelpCommand {
    fn topic(&self) -> HelpTopic {
        Self::TOPIC
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        let highlighter = if ctx.interactive {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        };

        let Some(name) = args.first() else {
            let width = self.topics.iter().map(|t| t.name.len()).max().unwrap_or(0);
            let out = ctx.console.out();
            for topic in &self.topics {
                let padding = " ".repeat(width - topic.name.len());
                writeln!(
                    out,
                    "  {}{}  {}",
                    highlighter.highlight_command(topic.name),
                    padding,
                    topic.summary
                )?;
            }
            return Ok(Flow::Continue(0));
        };

        let topic = self
            .topics
            .iter()
            .find(|topic| topic.name == name.as_str())
            .ok_or_else(|| CommandError::NoHelpTopic(name.clone()))?;

        let out = ctx.console.out();
        writeln!(out, "{}", highlighter.highlight_command(topic.usage))?;
        writeln!(out, "    {}", highlighter.highlight_hint(topic.summary))?;
        Ok(Flow::Continue(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Dispatcher;
    use crate::test_support::{context, SharedBuf};

    #[test]
    fn test_help_lists_every_builtin() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err);

        Dispatcher::new().dispatch(&mut ctx, &["help".to_string()]);
        ctx.console.flush().unwrap();

        let listing = out.contents();
        assert_eq!(listing.lines().count(), 8);
        for name in ["exit", "env", "help", "history", "setenv", "unsetenv", "cd", "alias"] {
            assert!(
                listing.lines().any(|line| line.trim_start().starts_with(name)),
                "{} missing from help",
                name
            );
        }
    }

    #[test]
    fn test_help_single_topic() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err);
        let cmd = HelpCommand::new(vec![HelpCommand::TOPIC]);

        cmd.execute(&mut ctx, &["help".to_string()]).unwrap();
        ctx.console.flush().unwrap();
        assert_eq!(out.contents(), "help [builtin]\n    Describe the builtins.\n");
    }

    #[test]
    fn test_help_unknown_topic() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err);
        let cmd = HelpCommand::new(vec![HelpCommand::TOPIC]);

        let result = cmd.execute(&mut ctx, &["ls".to_string()]);
        assert!(matches!(result, Err(CommandError::NoHelpTopic(ref n)) if n == "ls"));
    }
}
