use std::io::{self, BufWriter, Write};

use super::aliases::AliasTable;
use super::env::EnvironmentTable;
use crate::input::History;

/// Buffered standard output and standard error for one session.
pub struct Console {
    out: BufWriter<Box<dyn Write>>,
    err: BufWriter<Box<dyn Write>>,
}

impl Console {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            out: BufWriter::new(out),
            err: BufWriter::new(err),
        }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn out(&mut self) -> &mut impl Write {
        &mut self.out
    }

    pub fn err(&mut self) -> &mut impl Write {
        &mut self.err
    }

    /// Pushes both streams out. Called before every read and every spawn.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// Everything a session carries from one command to the next.
pub struct ExecutionContext {
    pub program: String,
    pub aliases: AliasTable,
    pub env: EnvironmentTable,
    pub history: History,
    pub console: Console,
    pub last_status: i32,
    pub line_number: usize,
    pub interactive: bool,
}

impl ExecutionContext {
    /// Starts with the process environment and no aliases.
    pub fn new(program: &str, interactive: bool, history: History, console: Console) -> Self {
        Self {
            program: program.to_string(),
            aliases: AliasTable::new(),
            env: EnvironmentTable::from_process(),
            history,
            console,
            last_status: 0,
            line_number: 0,
            interactive,
        }
    }

    pub fn with_env(mut self, env: EnvironmentTable) -> Self {
        self.env = env;
        self
    }

    /// Writes `<program>: <line>: <command>: <message>` to the error stream.
    pub fn report(&mut self, command: &str, message: &str) {
        let written = writeln!(
            self.console.err(),
            "{}: {}: {}: {}",
            self.program,
            self.line_number,
            command,
            message
        );
        if let Err(e) = written {
            tracing::debug!(error = %e, "could not write diagnostic");
        }
    }
}
