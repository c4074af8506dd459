use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};

pub mod chain;
mod executor;
pub mod expand;
pub mod tokenizer;

use crate::{
    config::ShellConfig,
    core::{commands::Dispatcher, commands::Flow, Console, ExecutionContext},
    error::ShellError,
    flags::{Flags, InputSource},
    input::{strip_comment, ChunkReader, History, LineSource, ReadOutcome, TerminalReader},
    process::{install_interrupt_handler, ChildGuard, ProcessRunner},
};

use chain::{should_run, ChainSplitter};
use executor::SegmentHandler;
use expand::Expander;
use tokenizer::Tokenizer;

fn chunked<R: Read + 'static>(source: R, chunk_size: usize) -> Box<dyn LineSource> {
    Box::new(ChunkReader::with_chunk_size(source, chunk_size))
}

pub struct Shell {
    pub(crate) reader: Box<dyn LineSource>,
    pub(crate) splitter: ChainSplitter,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) expander: Expander,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) runner: ProcessRunner,
    pub(crate) ctx: ExecutionContext,
    pub(crate) config: ShellConfig,
}

impl Shell {
    pub fn new(reader: Box<dyn LineSource>, ctx: ExecutionContext, config: ShellConfig) -> Self {
        let tokenizer = Tokenizer::default();
        let expander = Expander::new(tokenizer.clone(), config.alias_expansion_limit);

        Shell {
            reader,
            splitter: ChainSplitter::new(),
            tokenizer,
            expander,
            dispatcher: Dispatcher::new(),
            runner: ProcessRunner::default(),
            ctx,
            config,
        }
    }

    pub fn with_runner(mut self, runner: ProcessRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Builds the session the command line asks for: a script, a terminal,
    /// or piped standard input.
    pub fn from_flags(program: &str, flags: &Flags) -> Result<Self, ShellError> {
        let config = ShellConfig::new();

        let chunk_size = config.read_chunk_size;
        let (mut reader, interactive) = match flags.input_source() {
            InputSource::Script(path) => {
                let file = File::open(&path)
                    .map_err(|source| ShellError::ScriptOpen { path, source })?;
                (chunked(file, chunk_size), false)
            }
            InputSource::Stdin if io::stdin().is_terminal() => match TerminalReader::new() {
                Ok(terminal) => (Box::new(terminal) as Box<dyn LineSource>, true),
                Err(e) => {
                    tracing::warn!("line editor unavailable, reading raw input: {}", e);
                    (chunked(io::stdin(), chunk_size), true)
                }
            },
            InputSource::Stdin => (chunked(io::stdin(), chunk_size), false),
        };

        let history = match config.history_path() {
            Some(path) => History::new(path, config.history_max).unwrap_or_else(|e| {
                tracing::warn!("history unavailable: {}", e);
                History::in_memory(config.history_max)
            }),
            None => History::in_memory(config.history_max),
        };
        for entry in history.entries() {
            reader.add_history(&entry.command);
        }

        let guard = ChildGuard::new();
        if interactive {
            install_interrupt_handler(guard.clone(), config.prompt.clone())?;
        }

        tracing::debug!(interactive, "session starting");
        let ctx = ExecutionContext::new(program, interactive, history, Console::stdio());
        Ok(Shell::new(reader, ctx, config).with_runner(ProcessRunner::new(guard)))
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    /// Runs until `exit` or end of input and returns the session's status.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let result = self.run_loop();
        self.finish();
        result
    }

    fn run_loop(&mut self) -> Result<i32, ShellError> {
        loop {
            if !self.splitter.has_pending() {
                match self.next_line()? {
                    Some(line) => self.splitter.load(line),
                    None => return Ok(self.end_of_input()),
                }
            }

            let Some(segment) = self.splitter.next_segment() else {
                continue;
            };
            if !should_run(segment.preceded_by, self.ctx.last_status) {
                self.splitter.skip_remaining();
                continue;
            }

            let text = self.splitter.text(&segment).to_string();
            if let Flow::Exit(status) = self.execute_segment(&text) {
                return Ok(status);
            }
        }
    }

    /// Next line with its comment removed, or `None` once input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            if self.ctx.interactive && !self.reader.draws_prompt() {
                let _ = write!(self.ctx.console.out(), "{}", self.config.prompt);
            }
            self.flush_console();

            match self.reader.read_line(&self.config.prompt)? {
                ReadOutcome::Line(raw) => {
                    self.ctx.line_number += 1;
                    let line = strip_comment(&raw).to_string();
                    if !line.trim().is_empty() {
                        self.ctx.history.add(&line);
                        self.reader.add_history(&line);
                    }
                    return Ok(Some(line));
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::EndOfInput => return Ok(None),
            }
        }
    }

    fn end_of_input(&mut self) -> i32 {
        if self.ctx.interactive {
            let _ = writeln!(self.ctx.console.out());
            0
        } else {
            self.ctx.last_status
        }
    }

    fn flush_console(&mut self) {
        if let Err(e) = self.ctx.console.flush() {
            tracing::debug!(error = %e, "console flush failed");
        }
    }

    fn finish(&mut self) {
        self.flush_console();
        if let Err(e) = self.ctx.history.save() {
            tracing::warn!("Couldn't save history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvironmentTable;
    use crate::test_support::{context, SharedBuf};
    use std::io::Cursor;

    struct Session {
        shell: Shell,
        out: SharedBuf,
        err: SharedBuf,
    }

    fn session(script: &str) -> Session {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let ctx = context(&out, &err)
            .with_env(EnvironmentTable::from_pairs([("PATH", "/usr/bin:/bin")]));
        let reader = Box::new(ChunkReader::new(Cursor::new(script.to_string())));
        Session {
            shell: Shell::new(reader, ctx, ShellConfig::new()),
            out,
            err,
        }
    }

    fn run(script: &str) -> (i32, String, String) {
        let mut s = session(script);
        let status = s.shell.run().unwrap();
        (status, s.out.contents(), s.err.contents())
    }

    #[test]
    fn test_interactive_prompts_and_exits_zero_at_end_of_input() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let console = Console::new(Box::new(out.clone()), Box::new(err.clone()));
        let ctx = ExecutionContext::new("chainsh", true, History::in_memory(16), console)
            .with_env(EnvironmentTable::new());
        let reader = Box::new(ChunkReader::new(Cursor::new("setenv X\n".to_string())));
        let mut shell = Shell::new(reader, ctx, ShellConfig::new());

        let status = shell.run().unwrap();

        assert_eq!(status, 0);
        assert_eq!(shell.context().last_status, 1);
        assert_eq!(out.contents(), "$ $ \n");
        assert_eq!(err.contents(), "chainsh: 1: setenv: Incorrect number of arguments\n");
    }

    #[test]
    fn test_end_of_input_returns_last_status() {
        let (status, _, _) = run("setenv ONLY\n");
        assert_eq!(status, 1);

        let (status, _, _) = run("");
        assert_eq!(status, 0);
    }

    #[test]
    fn test_and_skips_after_failure() {
        let (status, out, _) = run("setenv X && env\n");
        assert_eq!(status, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_or_skips_after_success() {
        let (_, out, _) = run("setenv A 1 || setenv B 2\nenv\n");
        assert_eq!(out, "PATH=/usr/bin:/bin\nA=1\n");
    }

    #[test]
    fn test_sequence_always_runs() {
        let (_, out, _) = run("setenv X ; setenv B 2 ; env\n");
        assert_eq!(out, "PATH=/usr/bin:/bin\nB=2\n");
    }

    #[test]
    fn test_skip_drops_rest_of_line_only() {
        let (_, out, _) = run("setenv X && setenv A 1 ; setenv B 2\nsetenv C 3 ; env\n");
        assert_eq!(out, "PATH=/usr/bin:/bin\nC=3\n");
    }

    #[test]
    fn test_alias_and_variables_through_the_loop() {
        let (_, out, _) = run("alias show='setenv SHOWN'\nsetenv X ; show $?\nenv\n");
        assert_eq!(out, "PATH=/usr/bin:/bin\nSHOWN=1\n");
    }

    #[test]
    fn test_comments_are_stripped() {
        let (status, out, _) = run("#nothing here\nsetenv A 1 # trailing\nenv\n");
        assert_eq!(status, 0);
        assert_eq!(out, "PATH=/usr/bin:/bin\nA=1\n");
    }

    #[test]
    fn test_exit_stops_reading() {
        let (status, out, _) = run("exit 300\nenv\n");
        assert_eq!(status, 300);
        assert!(out.is_empty());
    }

    #[test]
    fn test_illegal_exit_continues() {
        let (status, _, err) = run("exit nope\nexit\n");
        assert_eq!(status, 2);
        assert_eq!(err, "chainsh: 1: exit: Illegal number: nope\n");
    }

    #[test]
    fn test_command_not_found_reports_line() {
        let (status, _, err) = run("\n\nno-such-command-here\n");
        assert_eq!(status, 127);
        assert_eq!(err, "chainsh: 3: no-such-command-here: Command not found\n");
    }

    #[test]
    fn test_history_records_processed_lines() {
        let mut s = session("setenv A 1 # set\n\n# only comment\nhistory\n");
        s.shell.run().unwrap();
        assert_eq!(s.out.contents(), "0: setenv A 1 \n1: history\n");
        assert_eq!(s.shell.context().line_number, 4);
    }

    #[test]
    fn test_external_status_feeds_chain() {
        let (status, out, _) = run("false || setenv RAN yes ; true && env\n");
        assert_eq!(status, 0);
        assert_eq!(out, "PATH=/usr/bin:/bin\nRAN=yes\n");
    }
}
