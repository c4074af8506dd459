use std::io::{ErrorKind, Read};

use super::{InputError, LineSource, ReadOutcome};
use crate::config::READ_CHUNK_SIZE;

/// Reads fixed-size chunks from a descriptor and hands them out one line at a
/// time. Bytes past the last delivered newline stay buffered for the next call.
pub struct ChunkReader<R> {
    source: R,
    buffer: Vec<u8>,
    consumed: usize,
    chunk_size: usize,
    exhausted: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, READ_CHUNK_SIZE)
    }

    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        Self {
            source,
            buffer: Vec::new(),
            consumed: 0,
            chunk_size: chunk_size.max(1),
            exhausted: false,
        }
    }

    /// Bytes read from the source but not yet delivered.
    #[cfg(test)]
    fn pending(&self) -> &[u8] {
        &self.buffer[self.consumed..]
    }

    fn take_line(&mut self, end: usize, skip: usize) -> String {
        let line = String::from_utf8_lossy(&self.buffer[self.consumed..end]).into_owned();
        self.consumed = end + skip;
        if self.consumed >= self.buffer.len() {
            self.buffer.clear();
            self.consumed = 0;
        } else if self.consumed >= self.chunk_size {
            self.buffer.drain(..self.consumed);
            self.consumed = 0;
        }
        line
    }

    fn fill(&mut self) -> Result<(), InputError> {
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            match self.source.read(&mut chunk) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.buffer.try_reserve(n).map_err(|_| {
                        InputError::Io(std::io::Error::new(
                            ErrorKind::OutOfMemory,
                            "input buffer could not grow",
                        ))
                    })?;
                    self.buffer.extend_from_slice(&chunk[..n]);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(InputError::Io(e)),
            }
        }
    }
}

impl<R: Read> LineSource for ChunkReader<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, InputError> {
        let mut searched = self.consumed;
        loop {
            if let Some(offset) = self.buffer[searched..].iter().position(|&b| b == b'\n') {
                let end = searched + offset;
                return Ok(ReadOutcome::Line(self.take_line(end, 1)));
            }
            searched = self.buffer.len();

            if self.exhausted {
                if self.consumed < self.buffer.len() {
                    let end = self.buffer.len();
                    return Ok(ReadOutcome::Line(self.take_line(end, 0)));
                }
                return Ok(ReadOutcome::EndOfInput);
            }

            self.fill()?;
        }
    }
}
