//! Line acquisition: the chunked reader used for scripts and pipes, the
//! terminal line editor used for interactive sessions, and the history list
//! both of them feed.

pub mod history;
mod reader;
mod terminal;

pub use history::types::HistoryEntry;
pub use history::History;
pub use reader::ChunkReader;
pub use terminal::TerminalReader;

use std::fmt;

/// Result of asking a [`LineSource`] for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// One line, trailing newline removed.
    Line(String),
    /// The pending read was abandoned by an interrupt; prompt again.
    Interrupted,
    /// No bytes remain.
    EndOfInput,
}

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Readline(rustyline::error::ReadlineError),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<rustyline::error::ReadlineError> for InputError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        InputError::Readline(err)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "read failed: {}", e),
            InputError::Readline(e) => write!(f, "line editor failed: {}", e),
        }
    }
}

impl std::error::Error for InputError {}

pub trait LineSource {
    /// Blocks until a full line, an interrupt, or end of input.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError>;

    /// Whether `read_line` draws the prompt itself.
    fn draws_prompt(&self) -> bool {
        false
    }

    /// Offers an accepted line to the source's own recall list, if it keeps one.
    fn add_history(&mut self, _line: &str) {}
}

/// Cuts a line at the first `#` that starts the line or follows a space.
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte == b'#' && (index == 0 || bytes[index - 1] == b' ') {
            return &line[..index];
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_comment() {
        assert_eq!(strip_comment("echo hi # comment"), "echo hi ");
    }

    #[test]
    fn test_strip_whole_line_comment() {
        assert_eq!(strip_comment("#comment"), "");
    }

    #[test]
    fn test_hash_inside_word_is_kept() {
        assert_eq!(strip_comment("echo a#b"), "echo a#b");
        assert_eq!(strip_comment("echo\t#tab"), "echo\t#tab");
    }

    #[test]
    fn test_no_comment() {
        assert_eq!(strip_comment("ls -l"), "ls -l");
        assert_eq!(strip_comment(""), "");
    }
}
