mod file_ops;
pub mod types;

use std::{collections::VecDeque, fmt, path::PathBuf};

use self::file_ops::FileOps;
use self::types::HistoryEntry;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Io(err)
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Lines entered during the session, preceded by whatever the history file
/// held at startup. Only the newest `max_entries` are retained.
pub struct History {
    entries: VecDeque<HistoryEntry>,
    file_ops: Option<FileOps>,
    max_entries: usize,
    next_number: usize,
}

impl History {
    /// Loads `history_file` (if it exists) and keeps the path for [`History::save`].
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, HistoryError> {
        let file_ops = FileOps::new(history_file);
        let loaded = file_ops.load_entries()?;

        let skip = loaded.len().saturating_sub(max_entries);
        let entries: VecDeque<HistoryEntry> = loaded
            .into_iter()
            .skip(skip)
            .enumerate()
            .map(|(number, command)| HistoryEntry::new(number, command))
            .collect();
        let next_number = entries.len();

        Ok(History {
            entries,
            file_ops: Some(file_ops),
            max_entries,
            next_number,
        })
    }

    /// A history that is never read from or written to disk.
    pub fn in_memory(max_entries: usize) -> Self {
        History {
            entries: VecDeque::new(),
            file_ops: None,
            max_entries,
            next_number: 0,
        }
    }

    pub fn add(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }

        self.entries
            .push_back(HistoryEntry::new(self.next_number, entry));
        self.next_number += 1;
        self.trim_entries();
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrites the history file from scratch. No-op for in-memory histories.
    pub fn save(&self) -> Result<(), HistoryError> {
        match &self.file_ops {
            Some(file_ops) => file_ops.write_entries(&self.entries),
            None => Ok(()),
        }
    }

    fn trim_entries(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}
