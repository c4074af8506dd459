use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{InputError, LineSource, ReadOutcome};

/// Interactive line source backed by rustyline. Ctrl-C abandons the line being
/// typed and Ctrl-D on an empty line ends the session.
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    pub fn new() -> Result<Self, InputError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(e) => Err(InputError::Readline(e)),
        }
    }

    fn draws_prompt(&self) -> bool {
        true
    }

    fn add_history(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::warn!("Couldn't add to line editor history: {}", e);
        }
    }
}
