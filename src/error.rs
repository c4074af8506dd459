use std::path::PathBuf;

use crate::input::InputError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Input(InputError),
    ScriptOpen { path: PathBuf, source: std::io::Error },
    FlagError(String),
    CtrlC(String),
}

impl ShellError {
    /// Status the whole process terminates with when this error ends the session.
    pub fn exit_status(&self) -> i32 {
        match self {
            ShellError::ScriptOpen { source, .. } => match source.raw_os_error() {
                Some(libc::EACCES) => 126,
                Some(libc::ENOENT) => 127,
                _ => 1,
            },
            ShellError::FlagError(_) => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<InputError> for ShellError {
    fn from(err: InputError) -> Self {
        ShellError::Input(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Input(e) => write!(f, "Input error: {}", e),
            ShellError::ScriptOpen { path, .. } => write!(f, "0: Can't open {}", path.display()),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
