use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag telling the interrupt handler whether a child owns the terminal.
#[derive(Clone, Debug, Default)]
pub struct ChildGuard {
    active: Arc<AtomicBool>,
}

/// Marks a child as running until dropped.
pub struct ActiveChild<'a> {
    guard: &'a ChildGuard,
}

impl ChildGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn enter(&self) -> ActiveChild<'_> {
        self.active.store(true, Ordering::SeqCst);
        ActiveChild { guard: self }
    }
}

impl Drop for ActiveChild<'_> {
    fn drop(&mut self) {
        self.guard.active.store(false, Ordering::SeqCst);
    }
}

/// Keeps the shell alive on SIGINT. With no child running, the pending input
/// is abandoned visually by starting a fresh prompt line. A running child gets
/// the signal from the terminal on its own.
pub fn install_interrupt_handler(guard: ChildGuard, prompt: String) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        if guard.is_active() {
            return;
        }
        let mut out = io::stdout().lock();
        let _ = write!(out, "\n{}", prompt);
        let _ = out.flush();
    })
}
