use std::collections::BTreeMap;

mod alias;
mod cd;
mod env;
mod exit;
mod help;
mod history;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetEnvCommand, UnsetEnvCommand};
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;

use crate::core::env::EnvError;
use crate::core::state::ExecutionContext;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    IllegalNumber(String),
    CantChangeDir(String),
    NotFound(String),
    NoHelpTopic(String),
    Env(EnvError),
    IoError(std::io::Error),
}

impl CommandError {
    /// Status stored as the last exit status when a builtin fails.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::IllegalNumber(_) | CommandError::CantChangeDir(_) => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::IllegalNumber(arg) => write!(f, "Illegal number: {}", arg),
            CommandError::CantChangeDir(dir) => write!(f, "can't cd to {}", dir),
            CommandError::NotFound(name) => write!(f, "{} not found", name),
            CommandError::NoHelpTopic(name) => write!(f, "no help topics match {}", name),
            CommandError::Env(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::Env(err)
    }
}

/// What the session does after a builtin returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(i32),
    Exit(i32),
}

impl Flow {
    pub fn status(self) -> i32 {
        match self {
            Flow::Continue(status) | Flow::Exit(status) => status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Builtin(Flow),
    NotBuiltin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub trait Command {
    fn topic(&self) -> HelpTopic;

    /// `args` excludes the command name.
    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Env(EnvCommand),
    SetEnv(SetEnvCommand),
    UnsetEnv(UnsetEnvCommand),
    Cd(CdCommand),
    Alias(AliasCommand),
    History(HistoryCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn topic(&self) -> HelpTopic {
        match self {
            CommandType::Exit(cmd) => cmd.topic(),
            CommandType::Env(cmd) => cmd.topic(),
            CommandType::SetEnv(cmd) => cmd.topic(),
            CommandType::UnsetEnv(cmd) => cmd.topic(),
            CommandType::Cd(cmd) => cmd.topic(),
            CommandType::Alias(cmd) => cmd.topic(),
            CommandType::History(cmd) => cmd.topic(),
            CommandType::Help(cmd) => cmd.topic(),
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext, args: &[String]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::Env(cmd) => cmd.execute(ctx, args),
            CommandType::SetEnv(cmd) => cmd.execute(ctx, args),
            CommandType::UnsetEnv(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Alias(cmd) => cmd.execute(ctx, args),
            CommandType::History(cmd) => cmd.execute(ctx, args),
            CommandType::Help(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// Fixed table of builtins keyed by exact name.
#[derive(Clone)]
pub struct Dispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let mut dispatcher = Self {
            commands: BTreeMap::new(),
        };

        dispatcher.register(CommandType::Exit(ExitCommand::new()));
        dispatcher.register(CommandType::Env(EnvCommand::new()));
        dispatcher.register(CommandType::SetEnv(SetEnvCommand::new()));
        dispatcher.register(CommandType::UnsetEnv(UnsetEnvCommand::new()));
        dispatcher.register(CommandType::Cd(CdCommand::new()));
        dispatcher.register(CommandType::Alias(AliasCommand::new()));
        dispatcher.register(CommandType::History(HistoryCommand::new()));

        let mut topics: Vec<HelpTopic> = dispatcher.commands.values().map(Command::topic).collect();
        topics.push(HelpCommand::TOPIC);
        topics.sort_by_key(|topic| topic.name);
        dispatcher.register(CommandType::Help(HelpCommand::new(topics)));

        dispatcher
    }

    fn register(&mut self, command: CommandType) {
        self.commands.insert(command.topic().name, command);
    }

    #[cfg(test)]
    fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs `argv[0]` if it names a builtin. Failures are reported on the
    /// context's error stream and turned into their status.
    pub fn dispatch(&self, ctx: &mut ExecutionContext, argv: &[String]) -> Dispatch {
        let Some((name, args)) = argv.split_first() else {
            return Dispatch::NotBuiltin;
        };
        let Some(command) = self.commands.get(name.as_str()) else {
            return Dispatch::NotBuiltin;
        };

        tracing::debug!(builtin = %name, args = args.len(), "dispatching builtin");
        match command.execute(ctx, args) {
            Ok(flow) => Dispatch::Builtin(flow),
            Err(e) => {
                ctx.report(name, &e.to_string());
                Dispatch::Builtin(Flow::Continue(e.status()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, SharedBuf};

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_builtin_command_detection() {
        let dispatcher = Dispatcher::new();
        for name in ["exit", "env", "help", "history", "setenv", "unsetenv", "cd", "alias"] {
            assert!(dispatcher.is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!dispatcher.is_builtin("ls"));
        assert!(!dispatcher.is_builtin("Exit"));
        assert!(!dispatcher.is_builtin(""));
    }

    #[test]
    fn test_execute_unknown_command() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err);
        let dispatcher = Dispatcher::new();

        assert_eq!(dispatcher.dispatch(&mut ctx, &argv(&["ls", "-l"])), Dispatch::NotBuiltin);
        assert_eq!(dispatcher.dispatch(&mut ctx, &[]), Dispatch::NotBuiltin);
    }

    #[test]
    fn test_failure_is_reported_with_status() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut ctx = context(&out, &err);
        ctx.line_number = 3;
        let dispatcher = Dispatcher::new();

        let result = dispatcher.dispatch(&mut ctx, &argv(&["setenv", "ONLY"]));
        ctx.console.flush().unwrap();

        assert_eq!(result, Dispatch::Builtin(Flow::Continue(1)));
        assert_eq!(
            err.contents(),
            "chainsh: 3: setenv: Incorrect number of arguments\n"
        );
    }

    #[test]
    fn test_command_error_status() {
        assert_eq!(CommandError::IllegalNumber("x".into()).status(), 2);
        assert_eq!(CommandError::CantChangeDir("/x".into()).status(), 2);
        assert_eq!(CommandError::NotFound("ll".into()).status(), 1);
        assert_eq!(CommandError::InvalidArguments("bad".into()).status(), 1);
    }

    #[test]
    fn test_command_error_display() {
        assert_eq!(
            CommandError::IllegalNumber("abc".into()).to_string(),
            "Illegal number: abc"
        );
        assert_eq!(
            CommandError::CantChangeDir("/nope".into()).to_string(),
            "can't cd to /nope"
        );
        assert_eq!(CommandError::NotFound("ll".into()).to_string(), "ll not found");
    }
}
