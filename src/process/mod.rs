use std::fmt;

pub mod executor;
pub mod resolve;
pub mod signal;

pub use executor::ProcessRunner;
pub use resolve::resolve;
pub use signal::{install_interrupt_handler, ChildGuard};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    PermissionDenied(String),
    Spawn { command: String, source: std::io::Error },
    Wait(std::io::Error),
}

impl ProcessError {
    /// Status recorded for a command that could not be run to completion.
    pub fn status(&self) -> i32 {
        match self {
            ProcessError::CommandNotFound(_) => 127,
            ProcessError::PermissionDenied(_) => 126,
            ProcessError::Spawn { .. } | ProcessError::Wait(_) => 1,
        }
    }

    /// Whether the failure is shown to the user rather than only logged.
    pub fn is_reported(&self) -> bool {
        !matches!(self, ProcessError::Spawn { .. })
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(_) => write!(f, "Command not found"),
            ProcessError::PermissionDenied(_) => write!(f, "Permission denied"),
            ProcessError::Spawn { command, source } => {
                write!(f, "could not start {}: {}", command, source)
            }
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
