use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::PathBuf,
};

use super::{HistoryEntry, HistoryError};

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// A missing file is an empty history.
    pub fn load_entries(&self) -> Result<Vec<String>, HistoryError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).split(b'\n') {
            let line = String::from_utf8_lossy(&line?).into_owned();
            if !line.trim().is_empty() {
                entries.push(line);
            }
        }

        Ok(entries)
    }

    /// Replaces the file contents with `entries`, one per line.
    pub fn write_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a HistoryEntry>,
    ) -> Result<(), HistoryError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.file_path)?;

        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry.command)?;
        }
        writer.flush()?;
        Ok(())
    }
}
